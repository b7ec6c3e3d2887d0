use crate::config::Settings;
use crate::constants::{MODULE_DISPLAY_SECTION, MODULE_NAME_LABEL};
use crate::error::Result;
use serde::Deserialize;
use std::io::Write;

/// Settings section consumed by [`ModuleDisplay`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModuleSection {
    pub module_name: String,
}

/// Shows the module name configured for this component.
#[derive(Debug, Clone)]
pub struct ModuleDisplay {
    section: ModuleSection,
}

impl ModuleDisplay {
    /// Reads the `module_display` section once; later changes to `settings`
    /// are not observed.
    pub fn new(settings: &Settings) -> Result<Self> {
        let section = settings.section(MODULE_DISPLAY_SECTION)?;
        Ok(Self { section })
    }

    pub fn module_name(&self) -> &str {
        &self.section.module_name
    }

    pub fn display_module_name(&self) -> Result<()> {
        self.write_module_name(&mut std::io::stdout().lock())
    }

    pub fn write_module_name(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{MODULE_NAME_LABEL} {}", self.section.module_name)?;
        Ok(())
    }
}
