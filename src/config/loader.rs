//! Settings loading and management

use crate::constants::CONFIG_FILENAMES;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// Read-only configuration tree keyed by component name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    sections: IndexMap<String, serde_json::Value>,
}

impl Settings {
    /// Load the first settings file found in `dir`.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = dir.join(config_file_name);

            if config_file_path.exists() {
                return Self::from_path(config_file_path);
            }
        }

        Err(Error::ConfigNotFound {
            dir: dir.display().to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }

    /// Load a specific settings file; `.json` files are JSON, anything else YAML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading settings from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty YAML document deserializes as null rather than a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Deserialize the section named `name`.
    pub fn section<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self
            .sections
            .get(name)
            .ok_or_else(|| Error::MissingSection(name.to_string()))?;
        log::trace!("Reading settings section '{name}': {value}");

        Ok(T::deserialize(value)?)
    }
}
