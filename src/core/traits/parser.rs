use std::path::Path;

use tracing::debug;

use crate::core::errors::{EnvDoctorError, FileRole, Result};
use crate::core::models::parsed_line::{ParsedFile, ParsedLine};

/// Port for turning env-style files into variable maps.
///
/// Implementors only supply the per-line grammar; splitting, folding and
/// reading from disk are shared.
pub trait ConfigParser: Send + Sync {
    /// Classify and decode one physical line. Never fails.
    fn parse_line(&self, raw: &str, line_number: usize) -> ParsedLine;

    /// Parse whole file content.
    ///
    /// Lines are split on `\n` or `\r\n`; a trailing newline does not add an
    /// extra line. Later assignments of the same key win.
    fn parse(&self, content: &str) -> ParsedFile {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let lines = content
            .lines()
            .enumerate()
            .map(|(idx, raw)| self.parse_line(raw, idx + 1))
            .collect();

        ParsedFile::from_lines(lines)
    }

    /// Read and parse the file at `path`.
    fn parse_file(&self, path: &Path, role: FileRole) -> Result<ParsedFile> {
        let content = std::fs::read_to_string(path).map_err(|source| EnvDoctorError::Read {
            role,
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = self.parse(&content);
        debug!(
            path = %path.display(),
            %role,
            lines = parsed.lines.len(),
            variables = parsed.vars.len(),
            "parsed file"
        );

        Ok(parsed)
    }
}
