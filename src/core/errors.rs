use std::fmt;
use std::path::PathBuf;

/// Which side of the comparison a file plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// The environment file being checked (`.env`).
    Env,
    /// The template listing the expected variables (`.env.example`).
    Example,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::Env => f.write_str("env"),
            FileRole::Example => f.write_str("example"),
        }
    }
}

/// All domain errors for env-doctor.
///
/// Validation findings (missing, extra, empty variables) are not errors;
/// they are reported through `ComparisonResult`.
#[derive(Debug, thiserror::Error)]
pub enum EnvDoctorError {
    #[error(
        "Failed to read {role} file \"{}\": {source}\n\n  \
         Check that the path is correct and the file exists.",
        path.display()
    )]
    Read {
        role: FileRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Config file not found: {}\n\n  \
         Remove --config (or ENV_DOCTOR_CONFIG) to run with defaults.",
        path.display()
    )]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnvDoctorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_role_and_path() {
        let err = EnvDoctorError::Read {
            role: FileRole::Example,
            path: PathBuf::from("config/.env.example"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();

        assert!(msg.starts_with("Failed to read example file \"config/.env.example\""));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn file_role_display() {
        assert_eq!(FileRole::Env.to_string(), "env");
        assert_eq!(FileRole::Example.to_string(), "example");
    }
}
