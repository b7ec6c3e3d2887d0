use std::fmt::Display;
use thiserror::Error;

use crate::constants::exit_codes;

/// The prompt kinds a cancellation can originate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SingleChoice,
    MultiSelect,
    Path,
    Autocomplete,
}

impl Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PromptKind::SingleChoice => "Multiple choice",
            PromptKind::MultiSelect => "Multiple select",
            PromptKind::Path => "Path",
            PromptKind::Autocomplete => "Autocomplete",
        };
        write!(f, "{s}")
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// Malformed prompt arguments, reported before anything is rendered.
    #[error("Invalid argument: {0}.")]
    InvalidArgument(String),

    /// The user aborted the prompt.
    #[error("{kind} prompt aborted.")]
    PromptCancelled { kind: PromptKind },

    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Terminal interaction failed. Original error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("No configuration file found in '{dir}'. Tried: {config_files}.")]
    ConfigNotFound { dir: String, config_files: String },

    #[error("Configuration section '{0}' is missing.")]
    MissingSection(String),
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::PromptCancelled { .. })
    }
}

/// Convenience type alias for Results with this crate's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Cancellation is an expected outcome and exits with the conventional
/// interrupt status instead of the generic failure code.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    let code =
        if err.is_cancelled() { exit_codes::CANCELLED } else { exit_codes::FAILURE };
    std::process::exit(code);
}
