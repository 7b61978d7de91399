//! Configuration file support for honker.
//!
//! Provides YAML-based configuration through `honker.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::license_compliance::domain::License;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "honker.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// License of the audited project, by name or URL
    pub license: Option<String>,
    pub project_name: Option<String>,
    pub project_organization: Option<String>,
    pub format: Option<String>,
    /// Dependency description, relative to the project directory
    pub dependencies_file: Option<PathBuf>,
    /// Directory of LICENSE/NOTICE templates, relative to the project directory
    pub templates_dir: Option<PathBuf>,
    pub fail_on_conflicts: Option<bool>,
    /// Manual license per `group:artifact` or full artifact coordinates
    pub license_overrides: Option<HashMap<String, String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    warn_unknown_override_licenses(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref license) = config.license {
        if let Err(e) = license.parse::<License>() {
            bail!("Invalid config: license: {}", e);
        }
    }

    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: format: {}", e);
        }
    }

    if let Some(ref overrides) = config.license_overrides {
        for (key, license) in overrides {
            if key.trim().is_empty() {
                bail!(
                    "Invalid config: license_overrides keys must not be empty.\n\n\
                     💡 Hint: Use \"group:artifact\" or full coordinates (e.g., \"org.acme:widget:1.0:jar\")."
                );
            }
            if license.trim().is_empty() {
                bail!(
                    "Invalid config: license_overrides.\"{}\" must not be empty.",
                    key
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Overrides naming no catalog license leave the artifact undetected
fn warn_unknown_override_licenses(config: &ConfigFile) {
    let Some(ref overrides) = config.license_overrides else {
        return;
    };
    for (key, license) in overrides {
        if license.parse::<License>().is_err() {
            eprintln!(
                "⚠️  Warning: License override '{}' for '{}' is not a known license.",
                license, key
            );
        }
    }
}
