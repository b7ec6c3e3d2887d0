//! Configuration handling for chooser
//!
//! - `loader`: Settings file loading and section lookup
//! - `display`: The configuration-backed module display component

pub mod display;
pub mod loader;

pub use display::{ModuleDisplay, ModuleSection};
pub use loader::Settings;
