use serde::Deserialize;
use std::path::Path;

use crate::core::errors::{EnvDoctorError, Result};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".env-doctor.toml";

/// Optional project configuration read from `.env-doctor.toml`.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub files: FilesSection,
    pub check: CheckSection,
    pub output: OutputSection,
}

impl AppConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `.env-doctor.toml` is read
    /// if present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) if !path.exists() => {
                return Err(EnvDoctorError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(config_path).map_err(|e| {
            EnvDoctorError::InvalidConfig {
                detail: format!("Failed to read {}: {e}", config_path.display()),
            }
        })?;

        let config = Self::from_toml(&content).map_err(|e| EnvDoctorError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", config_path.display()),
        })?;

        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// The `[files]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilesSection {
    /// Env file to check.
    pub env: Option<String>,
    /// Template file listing the expected variables.
    pub example: Option<String>,
}

/// The `[check]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CheckSection {
    /// Exit with status 1 when variables are missing.
    pub ci: bool,
    /// Only report missing variables.
    pub quiet: bool,
}

/// The `[output]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub json: bool,
    pub color: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            json: false,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(config.output.color);
        assert!(!config.check.ci);
    }

    #[test]
    fn full_config() {
        let config = AppConfig::from_toml(
            r#"
            [files]
            env = ".env.production"
            example = "config/.env.example"

            [check]
            ci = true
            quiet = true

            [output]
            json = true
            color = false
            "#,
        )
        .unwrap();

        assert_eq!(config.files.env.as_deref(), Some(".env.production"));
        assert_eq!(config.files.example.as_deref(), Some("config/.env.example"));
        assert!(config.check.ci);
        assert!(config.check.quiet);
        assert!(config.output.json);
        assert!(!config.output.color);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = AppConfig::from_toml("[output]\njson = true\n").unwrap();

        assert!(config.output.json);
        assert!(config.output.color);
        assert_eq!(config.files, FilesSection::default());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(AppConfig::from_toml("[check]\nci = \"yes\"\n").is_err());
    }

    #[test]
    fn load_explicit_missing_path_fails() {
        let dir = assert_fs::TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = AppConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, EnvDoctorError::ConfigNotFound { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn load_explicit_path() {
        let dir = assert_fs::TempDir::new().unwrap();
        let file = dir.child("doctor.toml");
        file.write_str("[files]\nexample = \"template.env\"\n").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.files.example.as_deref(), Some("template.env"));
    }

    #[test]
    fn load_invalid_toml_fails() {
        let dir = assert_fs::TempDir::new().unwrap();
        let file = dir.child("broken.toml");
        file.write_str("[files\nenv = ").unwrap();

        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, EnvDoctorError::InvalidConfig { .. }));
    }
}
