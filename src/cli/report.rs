use colored::Colorize;
use serde::Serialize;

use crate::core::errors::Result;
use crate::core::models::comparison::ComparisonResult;
use crate::core::models::variable_map::VariableMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Text only: hide the extra/empty sections and the summary.
    pub quiet: bool,
}

/// Render a comparison result in the requested format.
///
/// Colors follow the global `colored` override.
pub fn render(result: &ComparisonResult, options: &ReportOptions) -> Result<String> {
    match options.format {
        ReportFormat::Json => render_json(result),
        ReportFormat::Text => Ok(render_text(result, options.quiet)),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    summary: JsonSummary,
    missing: &'a [String],
    extra: &'a [String],
    empty: &'a [String],
    variables: &'a VariableMap,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    valid: usize,
    missing: usize,
    extra: usize,
    empty: usize,
}

fn render_json(result: &ComparisonResult) -> Result<String> {
    let report = JsonReport {
        valid: result.valid,
        summary: JsonSummary {
            total: result.total(),
            valid: result.valid_count(),
            missing: result.missing.len(),
            extra: result.extra.len(),
            empty: result.empty.len(),
        },
        missing: &result.missing,
        extra: &result.extra,
        empty: &result.empty,
        variables: &result.actual,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

fn render_text(result: &ComparisonResult, quiet: bool) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !result.missing.is_empty() {
        lines.push(String::new());
        lines.push(
            format!("✗ Missing ({}):", result.missing.len())
                .red()
                .to_string(),
        );
        for key in &result.missing {
            lines.push(format!("  {} {key}", "•".red()));
        }
    }

    if !quiet {
        push_warning_section(&mut lines, "Extra", &result.extra);
        push_warning_section(&mut lines, "Empty", &result.empty);

        lines.push(String::new());
        lines.push("Summary:".to_string());
        lines.push(format!(
            "  {} Valid: {} variables",
            "✓".green(),
            result.valid_count()
        ));
        if !result.missing.is_empty() {
            lines.push(format!(
                "  {} Missing: {} variables",
                "✗".red(),
                result.missing.len()
            ));
        }
        if !result.extra.is_empty() {
            lines.push(format!(
                "  {} Extra: {} variables",
                "⚠".yellow(),
                result.extra.len()
            ));
        }
        if !result.empty.is_empty() {
            lines.push(format!(
                "  {} Empty: {} variables",
                "⚠".yellow(),
                result.empty.len()
            ));
        }
    }

    lines.push(String::new());
    if result.valid {
        lines.push("Result: PASSED".green().bold().to_string());
    } else {
        lines.push(
            "Result: FAILED (missing required variables)"
                .red()
                .bold()
                .to_string(),
        );
    }

    lines.join("\n")
}

fn push_warning_section(lines: &mut Vec<String>, title: &str, keys: &[String]) {
    if keys.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(format!("⚠ {title} ({}):", keys.len()).yellow().to_string());
    for key in keys {
        lines.push(format!("  {} {key}", "•".yellow()));
    }
}
