use crate::constants::verbosity;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for chooser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Predefined answers as a JSON object keyed by prompt message, or `-` to read from stdin.
    ///
    /// When given, prompts are answered without touching the terminal.
    #[arg(short, long, global = true)]
    pub answers: Option<String>,

    /// Settings file; defaults to chooser.json/.yaml/.yml in the current directory.
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Pick exactly one of the given choices.
    Select(ChoiceArgs),
    /// Pick any number of the given choices.
    Checkbox(CheckboxArgs),
    /// Enter a filesystem path with tab completion.
    Path(PathArgs),
    /// Enter free text with suggestions from the given choices.
    Autocomplete(AutocompleteArgs),
    /// Print the module name from the settings file.
    ModuleName,
}

#[derive(Args, Debug, Clone)]
pub struct ChoiceArgs {
    /// Question shown to the user.
    pub message: String,

    /// Available choice (repeatable).
    #[arg(short, long = "choice", value_name = "CHOICE")]
    pub choices: Vec<String>,

    /// Pre-selected choice.
    #[arg(short, long)]
    pub default: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CheckboxArgs {
    /// Question shown to the user.
    pub message: String,

    /// Available choice (repeatable).
    #[arg(short, long = "choice", value_name = "CHOICE")]
    pub choices: Vec<String>,

    /// Pre-checked choice (repeatable).
    #[arg(short, long = "default", value_name = "CHOICE")]
    pub defaults: Option<Vec<String>>,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Question shown to the user.
    pub message: String,

    /// Initial path.
    #[arg(short, long)]
    pub default: Option<String>,

    /// Only complete directory names.
    #[arg(long = "only-directories")]
    pub only_directories: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AutocompleteArgs {
    /// Question shown to the user.
    pub message: String,

    /// Suggestion (repeatable).
    #[arg(short, long = "choice", value_name = "CHOICE")]
    pub choices: Vec<String>,

    /// Initial text; always offered as a suggestion.
    #[arg(short, long)]
    pub default: Option<String>,

    /// Only suggest choices starting with the typed text.
    #[arg(long = "prefix-only")]
    pub prefix_only: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
