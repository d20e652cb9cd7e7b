//! Validate that a `.env` file defines every variable documented in a
//! template such as `.env.example`.
//!
//! The library exposes the line parser, the file parser and the
//! comparison logic; the `env-doctor` binary wires them to a CLI.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;

pub use crate::adapters::parsers::dotenv_parser::DotenvParser;
pub use crate::core::errors::{EnvDoctorError, FileRole, Result};
pub use crate::core::models::comparison::{ComparisonResult, Diagnostic, DiagnosticKind};
pub use crate::core::models::parsed_line::{LineKind, ParsedFile, ParsedLine};
pub use crate::core::models::variable_map::VariableMap;
pub use crate::core::services::check_service::CheckService;
pub use crate::core::traits::parser::ConfigParser;
