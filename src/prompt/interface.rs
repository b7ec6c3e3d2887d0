//! Pure interfaces for rendering prompts without external dependencies
//!
//! Every renderer reports a cancelled prompt as `Ok(None)`; turning that
//! into an error is the facade's job, not the renderer's.

use crate::error::Result;

/// Configuration for single choice selection
#[derive(Debug, Clone, PartialEq)]
pub struct SelectConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub default_index: Option<usize>,
}

/// Configuration for multiple choice selection
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub defaults: Vec<bool>,
}

/// Configuration for filesystem path input
#[derive(Debug, Clone, PartialEq)]
pub struct PathConfig {
    pub prompt: String,
    pub default: String,
    pub only_directories: bool,
}

/// Configuration for free text input with suggestions
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub default: Option<String>,
    pub match_middle: bool,
}

/// Abstract interface for single choice selection
pub trait SelectRenderer {
    fn render_select(&self, config: &SelectConfig) -> Result<Option<usize>>;
}

/// Abstract interface for multiple choice selection
pub trait CheckboxRenderer {
    fn render_checkbox(&self, config: &CheckboxConfig) -> Result<Option<Vec<usize>>>;
}

/// Abstract interface for path input
pub trait PathRenderer {
    fn render_path(&self, config: &PathConfig) -> Result<Option<String>>;
}

/// Abstract interface for autocomplete input
pub trait AutocompleteRenderer {
    fn render_autocomplete(&self, config: &AutocompleteConfig) -> Result<Option<String>>;
}

/// Combined interface that provides all prompt kinds
pub trait Renderer:
    SelectRenderer + CheckboxRenderer + PathRenderer + AutocompleteRenderer
{
}

// Blanket implementation for any type that implements all renderer interfaces
impl<T> Renderer for T where
    T: SelectRenderer + CheckboxRenderer + PathRenderer + AutocompleteRenderer
{
}
