use tracing::info;

use crate::adapters::parsers::dotenv_parser::DotenvParser;
use crate::cli::RunOptions;
use crate::cli::output;
use crate::cli::report::{self, ReportFormat, ReportOptions};
use crate::core::errors::Result;
use crate::core::services::check_service::CheckService;

/// Run one validation and print the report.
///
/// Returns whether the env file defines every template variable.
pub fn execute(options: &RunOptions) -> Result<bool> {
    if !options.json && !options.quiet {
        output::header(
            env!("CARGO_PKG_VERSION"),
            &options.env_path.display().to_string(),
            &options.example_path.display().to_string(),
        );
    }

    let result = CheckService.validate(&DotenvParser, &options.env_path, &options.example_path)?;
    info!(
        valid = result.valid,
        missing = result.missing.len(),
        extra = result.extra.len(),
        empty = result.empty.len(),
        "validation finished"
    );

    let report_options = ReportOptions {
        format: if options.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        },
        quiet: options.quiet,
    };
    println!("{}", report::render(&result, &report_options)?);

    Ok(result.valid)
}
