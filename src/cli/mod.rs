pub mod check;
pub mod logging;
pub mod output;
pub mod report;

use std::path::PathBuf;

use clap::Parser;

use crate::config::app_config::AppConfig;

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_EXAMPLE_FILE: &str = ".env.example";

/// Validation passed, or failed outside CI mode.
pub const EXIT_OK: i32 = 0;
/// Validation failed in CI mode.
pub const EXIT_FAILED: i32 = 1;
/// Operational error: unreadable file, bad config, bad arguments.
pub const EXIT_ERROR: i32 = 2;

const EXAMPLES: &str = "\
Examples:
  env-doctor
  env-doctor --env .env.production --example .env.example
  env-doctor --ci --json";

/// Validate and audit .env files against .env.example
#[derive(Parser, Debug)]
#[command(
    name = "env-doctor",
    version,
    about,
    long_about = None,
    disable_version_flag = true,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Path to env file (default: .env)
    #[arg(short, long, value_name = "PATH")]
    pub env: Option<String>,

    /// Path to example file (default: .env.example)
    #[arg(short = 'x', long, value_name = "PATH")]
    pub example: Option<String>,

    /// CI mode: exit 1 when required variables are missing
    #[arg(long)]
    pub ci: bool,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Only show errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log more detail to stderr (repeat for trace output)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to config file (default: .env-doctor.toml if present)
    #[arg(long, env = "ENV_DOCTOR_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    /// Show version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    pub version: Option<bool>,
}

/// Settings for one run after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub env_path: PathBuf,
    pub example_path: PathBuf,
    pub ci: bool,
    pub json: bool,
    pub quiet: bool,
    pub color: bool,
}

impl Cli {
    /// Merge flags over the config file. `no_color_env` reports whether
    /// `NO_COLOR` is set.
    pub fn resolve(&self, config: &AppConfig, no_color_env: bool) -> RunOptions {
        let env_path = self
            .env
            .clone()
            .or_else(|| config.files.env.clone())
            .unwrap_or_else(|| DEFAULT_ENV_FILE.to_string());
        let example_path = self
            .example
            .clone()
            .or_else(|| config.files.example.clone())
            .unwrap_or_else(|| DEFAULT_EXAMPLE_FILE.to_string());

        RunOptions {
            env_path: PathBuf::from(env_path),
            example_path: PathBuf::from(example_path),
            ci: self.ci || config.check.ci,
            json: self.json || config.output.json,
            quiet: self.quiet || config.check.quiet,
            color: !self.no_color && !no_color_env && config.output.color,
        }
    }
}

/// Process exit status for a finished validation.
pub fn exit_code(valid: bool, ci: bool) -> i32 {
    if ci && !valid { EXIT_FAILED } else { EXIT_OK }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::app_config::{CheckSection, FilesSection, OutputSection};

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("env-doctor").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_without_flags_or_config() {
        let options = cli(&[]).resolve(&AppConfig::default(), false);

        assert_eq!(options.env_path, PathBuf::from(".env"));
        assert_eq!(options.example_path, PathBuf::from(".env.example"));
        assert!(!options.ci);
        assert!(!options.json);
        assert!(!options.quiet);
        assert!(options.color);
    }

    #[test]
    fn short_flags() {
        let options = cli(&["-e", "a.env", "-x", "b.env", "-j", "-q"])
            .resolve(&AppConfig::default(), false);

        assert_eq!(options.env_path, PathBuf::from("a.env"));
        assert_eq!(options.example_path, PathBuf::from("b.env"));
        assert!(options.json);
        assert!(options.quiet);
    }

    #[test]
    fn flags_override_config_paths() {
        let config = AppConfig {
            files: FilesSection {
                env: Some("config.env".into()),
                example: Some("config.example".into()),
            },
            ..AppConfig::default()
        };
        let options = cli(&["--env", "flag.env"]).resolve(&config, false);

        assert_eq!(options.env_path, PathBuf::from("flag.env"));
        assert_eq!(options.example_path, PathBuf::from("config.example"));
    }

    #[test]
    fn config_switches_on_booleans() {
        let config = AppConfig {
            check: CheckSection {
                ci: true,
                quiet: true,
            },
            output: OutputSection {
                json: true,
                color: true,
            },
            ..AppConfig::default()
        };
        let options = cli(&[]).resolve(&config, false);

        assert!(options.ci);
        assert!(options.quiet);
        assert!(options.json);
    }

    #[test]
    fn color_disabled_by_any_source() {
        let config = AppConfig::default();
        assert!(!cli(&["--no-color"]).resolve(&config, false).color);
        assert!(!cli(&[]).resolve(&config, true).color);

        let no_color_config = AppConfig {
            output: OutputSection {
                json: false,
                color: false,
            },
            ..AppConfig::default()
        };
        assert!(!cli(&[]).resolve(&no_color_config, false).color);
    }

    #[test]
    fn verbose_counts() {
        assert_eq!(cli(&["--verbose", "--verbose"]).verbose, 2);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["env-doctor", "--bogus"]).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_ERROR);
    }

    #[test]
    fn exit_codes() {
        assert_eq!(exit_code(true, false), EXIT_OK);
        assert_eq!(exit_code(false, false), EXIT_OK);
        assert_eq!(exit_code(true, true), EXIT_OK);
        assert_eq!(exit_code(false, true), EXIT_FAILED);
    }
}
