//! Dialoguer-based implementations of the renderer interfaces
//!
//! This module renders prompts in the terminal with the dialoguer library.

use super::completion::{ChoiceCompletion, PathCompletion};
use super::interface::{
    AutocompleteConfig, AutocompleteRenderer, CheckboxConfig, CheckboxRenderer,
    PathConfig, PathRenderer, SelectConfig, SelectRenderer,
};
use crate::error::Result;
use dialoguer::{theme::ColorfulTheme, FuzzySelect, Input, MultiSelect};
use std::io;
use std::sync::Once;

static INTERRUPT_HANDLER: Once = Once::new();

/// console answers Ctrl-C by raising SIGINT before it reports the interrupted
/// read. A no-op handler keeps the process alive so the read error arrives.
fn absorb_interrupts() {
    INTERRUPT_HANDLER.call_once(|| {
        if let Err(err) = ctrlc::set_handler(|| {}) {
            log::warn!("Failed to install interrupt handler: {err}");
        }
    });
}

/// Dialoguer-based implementation of all renderer interfaces
pub struct DialoguerRenderer {
    theme: ColorfulTheme,
}

impl DialoguerRenderer {
    pub fn new() -> Self {
        absorb_interrupts();
        Self { theme: ColorfulTheme::default() }
    }
}

impl Default for DialoguerRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Ctrl-C surfaces from the terminal as an interrupted read.
fn cancelled_as_none<T>(result: dialoguer::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

impl SelectRenderer for DialoguerRenderer {
    fn render_select(&self, config: &SelectConfig) -> Result<Option<usize>> {
        let selection = FuzzySelect::with_theme(&self.theme)
            .with_prompt(&config.prompt)
            .items(&config.choices)
            .default(config.default_index.unwrap_or(0))
            .highlight_matches(true)
            .vim_mode(false)
            .interact_opt();

        cancelled_as_none(selection).map(Option::flatten)
    }
}

impl CheckboxRenderer for DialoguerRenderer {
    fn render_checkbox(&self, config: &CheckboxConfig) -> Result<Option<Vec<usize>>> {
        let indices = MultiSelect::with_theme(&self.theme)
            .with_prompt(&config.prompt)
            .items(&config.choices)
            .defaults(&config.defaults)
            .interact_opt();

        cancelled_as_none(indices).map(Option::flatten)
    }
}

impl PathRenderer for DialoguerRenderer {
    fn render_path(&self, config: &PathConfig) -> Result<Option<String>> {
        let completion = PathCompletion::new(config.only_directories);

        let input = Input::<String>::with_theme(&self.theme)
            .with_prompt(&config.prompt)
            .with_initial_text(config.default.as_str())
            .allow_empty(true)
            .completion_with(&completion)
            .interact_text();

        cancelled_as_none(input)
    }
}

impl AutocompleteRenderer for DialoguerRenderer {
    fn render_autocomplete(&self, config: &AutocompleteConfig) -> Result<Option<String>> {
        let completion = ChoiceCompletion::new(config.choices.clone(), config.match_middle);

        let input = Input::<String>::with_theme(&self.theme)
            .with_prompt(&config.prompt)
            .with_initial_text(config.default.as_deref().unwrap_or(""))
            .allow_empty(true)
            .completion_with(&completion)
            .interact_text();

        cancelled_as_none(input)
    }
}
