use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use crate::core::errors::{FileRole, Result};
use crate::core::models::comparison::{ComparisonResult, Diagnostic, DiagnosticKind};
use crate::core::models::variable_map::VariableMap;
use crate::core::traits::parser::ConfigParser;

/// Validates that an env file defines every variable of its template.
pub struct CheckService;

impl CheckService {
    /// Read both files and compare them.
    ///
    /// The env file is read first; any read failure aborts the check.
    pub fn validate(
        &self,
        parser: &dyn ConfigParser,
        env_path: &Path,
        example_path: &Path,
    ) -> Result<ComparisonResult> {
        let env_file = parser.parse_file(env_path, FileRole::Env)?;
        let example_file = parser.parse_file(example_path, FileRole::Example)?;

        let result = self.compare(
            env_file.vars,
            example_file.vars,
            &env_path.display().to_string(),
            &example_path.display().to_string(),
        );

        for diagnostic in &result.diagnostics {
            debug!(kind = ?diagnostic.kind, variable = ?diagnostic.variable, "{}", diagnostic.message);
        }

        Ok(result)
    }

    /// Compare an env file's variables against a template's.
    ///
    /// - **Missing**: keys in `template` that are absent from `actual`
    /// - **Extra**: keys in `actual` that are absent from `template`
    /// - **Empty**: keys in `actual` whose value is the empty string,
    ///   whether or not the template declares them
    ///
    /// Only missing keys make the result invalid. All lists are sorted.
    pub fn compare(
        &self,
        actual: VariableMap,
        template: VariableMap,
        actual_path: &str,
        template_path: &str,
    ) -> ComparisonResult {
        let actual_keys: BTreeSet<&str> = actual.keys().collect();
        let template_keys: BTreeSet<&str> = template.keys().collect();

        let missing: Vec<String> = template_keys
            .difference(&actual_keys)
            .map(|k| k.to_string())
            .collect();

        let extra: Vec<String> = actual_keys
            .difference(&template_keys)
            .map(|k| k.to_string())
            .collect();

        let empty: Vec<String> = actual
            .iter()
            .filter(|(_, v)| v.is_empty())
            .map(|(k, _)| k)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut diagnostics = Vec::with_capacity(missing.len() + extra.len() + empty.len());
        diagnostics.extend(missing.iter().map(|key| Diagnostic {
            kind: DiagnosticKind::Missing,
            variable: Some(key.clone()),
            message: format!(
                "Variable \"{key}\" is defined in {template_path} but missing in {actual_path}"
            ),
            file: Some(actual_path.to_string()),
        }));
        diagnostics.extend(extra.iter().map(|key| Diagnostic {
            kind: DiagnosticKind::Extra,
            variable: Some(key.clone()),
            message: format!(
                "Variable \"{key}\" is defined in {actual_path} but not documented in {template_path}"
            ),
            file: Some(actual_path.to_string()),
        }));
        diagnostics.extend(empty.iter().map(|key| Diagnostic {
            kind: DiagnosticKind::Empty,
            variable: Some(key.clone()),
            message: format!("Variable \"{key}\" has an empty value in {actual_path}"),
            file: Some(actual_path.to_string()),
        }));

        ComparisonResult {
            valid: missing.is_empty(),
            missing,
            extra,
            empty,
            actual,
            template,
            diagnostics,
        }
    }
}
