//! Validated interactive prompts
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract renderer interfaces independent of any UI library
//! - `dialoguer`: Concrete terminal renderer using the dialoguer library
//! - `scripted`: Non-interactive renderer answering from predefined values
//! - `completion`: Tab completion sources for the text prompts
//!
//! [`Prompts`] sits on top: it checks arguments before anything is rendered
//! and turns a renderer's `None` into [`Error::PromptCancelled`].

use crate::{
    constants::validation,
    error::{Error, PromptKind, Result},
};
use indexmap::IndexSet;

pub mod completion;
pub mod dialoguer;
pub mod interface;
pub mod scripted;

pub use self::dialoguer::DialoguerRenderer;
pub use interface::*;
pub use scripted::ScriptedRenderer;

/// Prompt facade forwarding validated requests to a renderer.
pub struct Prompts<R: Renderer> {
    renderer: R,
}

impl Prompts<DialoguerRenderer> {
    /// Prompts rendered interactively in the terminal.
    pub fn interactive() -> Self {
        Self::new(DialoguerRenderer::new())
    }
}

impl<R: Renderer> Prompts<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Render a select prompt and return the chosen option.
    pub fn single_choice<S: AsRef<str>>(
        &self,
        message: &str,
        choices: &[S],
        default: Option<&str>,
    ) -> Result<String> {
        let choices = to_owned_choices(choices)?;
        let default_index = match default {
            Some(default) => Some(
                choices
                    .iter()
                    .position(|choice| choice == default)
                    .ok_or_else(|| invalid(validation::DEFAULT_NOT_IN_CHOICES))?,
            ),
            None => None,
        };

        let config = SelectConfig {
            prompt: message.to_string(),
            choices,
            default_index,
        };
        let index = self
            .renderer
            .render_select(&config)?
            .ok_or(Error::PromptCancelled { kind: PromptKind::SingleChoice })?;

        pick(&config.choices, index)
    }

    /// Render a checkbox prompt and return the selected options.
    pub fn multi_select<S: AsRef<str>>(
        &self,
        message: &str,
        choices: &[S],
        default: Option<&[S]>,
    ) -> Result<Vec<String>> {
        let choices = to_owned_choices(choices)?;
        let default: IndexSet<&str> =
            default.unwrap_or_default().iter().map(|value| value.as_ref()).collect();

        let unknown: Vec<String> = default
            .iter()
            .filter(|value| !choices.iter().any(|choice| choice == *value))
            .map(|value| format!("{value:?}"))
            .collect();
        if !unknown.is_empty() {
            return Err(invalid(format!(
                "{}: {}",
                validation::INVALID_DEFAULTS,
                unknown.join(", ")
            )));
        }

        let defaults =
            choices.iter().map(|choice| default.contains(choice.as_str())).collect();
        let config = CheckboxConfig { prompt: message.to_string(), choices, defaults };
        let indices = self
            .renderer
            .render_checkbox(&config)?
            .ok_or(Error::PromptCancelled { kind: PromptKind::MultiSelect })?;

        indices.into_iter().map(|index| pick(&config.choices, index)).collect()
    }

    /// Collect a filesystem path with tab completion support.
    pub fn path_input(
        &self,
        message: &str,
        default: Option<&str>,
        only_directories: bool,
    ) -> Result<String> {
        let config = PathConfig {
            prompt: message.to_string(),
            default: default.unwrap_or_default().to_string(),
            only_directories,
        };

        self.renderer
            .render_path(&config)?
            .ok_or(Error::PromptCancelled { kind: PromptKind::Path })
    }

    /// Collect free text with inline completion suggestions.
    pub fn autocomplete_input<I, S>(
        &self,
        message: &str,
        choices: I,
        default: Option<&str>,
        match_middle: bool,
    ) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values: IndexSet<String> = choices.into_iter().map(Into::into).collect();
        if let Some(default) = default {
            values.insert(default.to_string());
        }

        let config = AutocompleteConfig {
            prompt: message.to_string(),
            choices: values.into_iter().collect(),
            default: default.map(str::to_string),
            match_middle,
        };

        self.renderer
            .render_autocomplete(&config)?
            .ok_or(Error::PromptCancelled { kind: PromptKind::Autocomplete })
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidArgument(message.into())
}

fn to_owned_choices<S: AsRef<str>>(choices: &[S]) -> Result<Vec<String>> {
    if choices.is_empty() {
        return Err(invalid(validation::EMPTY_CHOICES));
    }
    Ok(choices.iter().map(|choice| choice.as_ref().to_string()).collect())
}

/// Map a renderer-reported index back to its choice.
fn pick(choices: &[String], index: usize) -> Result<String> {
    choices.get(index).cloned().ok_or_else(|| {
        invalid(format!("selection index {index} is out of range for {} choices", choices.len()))
    })
}
