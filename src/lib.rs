/// Handles argument parsing and command dispatch.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Settings files and the configuration-backed display component.
pub mod config;

/// Validated prompts and their renderers.
pub mod prompt;

/// A set of helpers for reading input.
pub mod ioutils;

/// Constants shared across the crate.
pub mod constants;
