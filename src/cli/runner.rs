use crate::{
    cli::{Cli, Commands},
    config::{ModuleDisplay, Settings},
    constants::STDIN_INDICATOR,
    error::{Error, Result},
    ioutils::read_from,
    prompt::{Prompts, Renderer, ScriptedRenderer},
};
use std::io::Write;
use std::path::Path;

/// Main CLI runner dispatching one prompt or display command
pub struct Runner {
    cli: Cli,
}

impl Runner {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn run(self) -> Result<()> {
        if let Commands::ModuleName = self.cli.command {
            let settings = self.load_settings()?;
            return ModuleDisplay::new(&settings)?.display_module_name();
        }

        let mut out = std::io::stdout().lock();
        match self.scripted_renderer()? {
            Some(renderer) => {
                log::debug!("Answering prompts from predefined answers");
                dispatch(&Prompts::new(renderer), &self.cli.command, &mut out)
            }
            None => dispatch(&Prompts::interactive(), &self.cli.command, &mut out),
        }
    }

    fn load_settings(&self) -> Result<Settings> {
        match &self.cli.config {
            Some(path) => Settings::from_path(path),
            None => Settings::load(Path::new(".")),
        }
    }

    fn scripted_renderer(&self) -> Result<Option<ScriptedRenderer>> {
        let Some(answers) = &self.cli.answers else {
            return Ok(None);
        };

        let content = if answers == STDIN_INDICATOR {
            read_from(std::io::stdin())?
        } else {
            answers.clone()
        };
        ScriptedRenderer::from_json(&content).map(Some)
    }
}

/// Run the prompt named by `command` and write its answer to `out`.
pub fn dispatch<R: Renderer>(
    prompts: &Prompts<R>,
    command: &Commands,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::Select(args) => {
            let answer =
                prompts.single_choice(&args.message, &args.choices, args.default.as_deref())?;
            writeln!(out, "{answer}")?;
        }
        Commands::Checkbox(args) => {
            let answers = prompts.multi_select(
                &args.message,
                &args.choices,
                args.defaults.as_deref(),
            )?;
            for answer in answers {
                writeln!(out, "{answer}")?;
            }
        }
        Commands::Path(args) => {
            let path = prompts.path_input(
                &args.message,
                args.default.as_deref(),
                args.only_directories,
            )?;
            writeln!(out, "{path}")?;
        }
        Commands::Autocomplete(args) => {
            let text = prompts.autocomplete_input(
                &args.message,
                args.choices.iter().cloned(),
                args.default.as_deref(),
                !args.prefix_only,
            )?;
            writeln!(out, "{text}")?;
        }
        Commands::ModuleName => {
            return Err(Error::InvalidArgument(
                "module-name does not render a prompt".to_string(),
            ))
        }
    }
    Ok(())
}

pub fn run(cli: Cli) -> Result<()> {
    Runner::new(cli).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_scripted(args: &[&str], renderer: ScriptedRenderer) -> Result<String> {
        let cli = Cli::parse_from(std::iter::once("chooser").chain(args.iter().copied()));
        let mut out = Vec::new();
        dispatch(&Prompts::new(renderer), &cli.command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn select_prints_the_answer() {
        let renderer = ScriptedRenderer::new().with_answer("Language?", "rust");
        let out =
            run_scripted(&["select", "Language?", "-c", "python", "-c", "rust"], renderer)
                .unwrap();
        assert_eq!(out, "rust\n");
    }

    #[test]
    fn checkbox_prints_one_answer_per_line() {
        let out = run_scripted(
            &["checkbox", "Stack?", "-c", "a", "-c", "b", "-c", "c", "-d", "a", "-d", "c"],
            ScriptedRenderer::new(),
        )
        .unwrap();
        assert_eq!(out, "a\nc\n");
    }

    #[test]
    fn autocomplete_falls_back_to_default() {
        let out = run_scripted(
            &["autocomplete", "Name?", "-c", "alpha", "-d", "beta"],
            ScriptedRenderer::new(),
        )
        .unwrap();
        assert_eq!(out, "beta\n");
    }

    #[test]
    fn cancelled_path_is_reported() {
        let err = run_scripted(&["path", "Where?"], ScriptedRenderer::new().with_cancel("Where?"))
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn invalid_default_is_rejected_before_answering() {
        let err = run_scripted(
            &["select", "Language?", "-c", "python", "-d", "go"],
            ScriptedRenderer::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
