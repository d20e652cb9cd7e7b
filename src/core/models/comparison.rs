use serde::Serialize;

use crate::core::models::variable_map::VariableMap;

/// Category of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    Missing,
    Extra,
    Empty,
    ParseError,
}

/// A human-readable description of one finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Result of checking an env file against its template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    /// True when no template variable is missing.
    pub valid: bool,
    /// Template variables absent from the env file, sorted.
    pub missing: Vec<String>,
    /// Env variables not declared in the template, sorted.
    pub extra: Vec<String>,
    /// Env variables with an empty value, sorted.
    pub empty: Vec<String>,
    pub actual: VariableMap,
    pub template: VariableMap,
    pub diagnostics: Vec<Diagnostic>,
}

impl ComparisonResult {
    /// Number of variables declared in the template.
    pub fn total(&self) -> usize {
        self.template.len()
    }

    /// Number of template variables present in the env file.
    pub fn valid_count(&self) -> usize {
        self.total() - self.missing.len()
    }

    /// Diagnostics of one category.
    pub fn diagnostics_of(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }
}
