//! Module metadata configuration.
//! Holds the values substituted into the project and loads optional overrides
//! from a setup file in the project root.

use crate::constants::{CONFIG_FILES, TEMPLATE_MODULE_NAME};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Metadata describing the Magisk module being prepared.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleConfig {
    pub name: String,
    pub display_name: String,
    pub version: String,
    pub version_code: String,
    pub description: String,
    pub author: String,
    pub repository_name: String,
    pub repository_owner: String,
}

/// On-disk shape of the setup file. Every field may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawModuleConfig {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub version: Option<String>,
    pub version_code: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub repository_name: Option<String>,
    pub repository_owner: Option<String>,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        RawModuleConfig::default().resolve()
    }
}

impl RawModuleConfig {
    /// Fills missing fields, deriving the dependent ones from the others.
    ///
    /// `version_code` falls back to `version` without dots, the repository
    /// name to the module name and the repository owner to the author.
    pub fn resolve(self) -> ModuleConfig {
        let name = self.name.unwrap_or_else(|| "battery-optimizer".to_string());
        let version = self.version.unwrap_or_else(|| "1.0".to_string());
        let author = self.author.unwrap_or_else(|| "claude ai".to_string());

        ModuleConfig {
            display_name: self
                .display_name
                .unwrap_or_else(|| "Battery Optimizer".to_string()),
            version_code: self
                .version_code
                .unwrap_or_else(|| version.replace('.', "")),
            description: self.description.unwrap_or_else(|| {
                "Magisk module that optimizes battery life by managing power-hungry \
                 processes and tweaking system parameters"
                    .to_string()
            }),
            repository_name: self.repository_name.unwrap_or_else(|| name.clone()),
            repository_owner: self.repository_owner.unwrap_or_else(|| author.clone()),
            name,
            version,
            author,
        }
    }
}

impl ModuleConfig {
    /// Checks that the module name is usable as a Magisk module id.
    ///
    /// # Errors
    /// * `Error::InvalidModuleName` if the name contains a space or is still
    ///   the template placeholder
    pub fn validate(&self) -> Result<()> {
        if self.name.contains(' ') {
            return Err(Error::InvalidModuleName {
                name: self.name.clone(),
                reason: "module name contains a space".to_string(),
            });
        }
        if self.name == TEMPLATE_MODULE_NAME {
            return Err(Error::InvalidModuleName {
                name: self.name.clone(),
                reason: "module name is still the template placeholder".to_string(),
            });
        }
        Ok(())
    }
}

/// Parses setup file content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML
pub fn parse_config(content: &str) -> Result<ModuleConfig> {
    let raw: RawModuleConfig = match serde_json::from_str(content) {
        Ok(raw) => raw,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e)))?,
    };
    Ok(raw.resolve())
}

/// Loads the module configuration for a project root.
///
/// The first existing file of [`CONFIG_FILES`] is parsed; without one the
/// built-in defaults are used.
///
/// # Arguments
/// * `project_root` - Directory searched for a setup file
///
/// # Returns
/// * `Result<ModuleConfig>` - Resolved configuration
pub fn get_config<P: AsRef<Path>>(project_root: P) -> Result<ModuleConfig> {
    for file in CONFIG_FILES {
        let config_path = project_root.as_ref().join(file);
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path).map_err(|e| {
                Error::ConfigError(format!("{}: {}", config_path.display(), e))
            })?;
            return parse_config(&content);
        }
    }

    debug!("No setup file found (tried: {}), using defaults", CONFIG_FILES.join(", "));
    Ok(ModuleConfig::default())
}
