//! Constants used throughout chooser

/// Settings file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["chooser.json", "chooser.yaml", "chooser.yml"];

/// Settings section read by the module display component
pub const MODULE_DISPLAY_SECTION: &str = "module_display";

/// Label printed in front of the configured module name
pub const MODULE_NAME_LABEL: &str = "Module name:";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Argument validation messages
pub mod validation {
    pub const EMPTY_CHOICES: &str = "choices must contain at least one option";
    pub const DEFAULT_NOT_IN_CHOICES: &str = "default must be one of the provided choices";
    pub const INVALID_DEFAULTS: &str = "default contains invalid choices";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
    pub const CANCELLED: i32 = 130;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
