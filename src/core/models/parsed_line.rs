use crate::core::models::variable_map::VariableMap;

/// What a single physical line turned out to be.
///
/// Lines without an `=` (after an optional `export ` prefix) are classified
/// as `Empty` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A blank, whitespace-only, or unrecognizable line.
    Empty,
    /// A full-line comment (`# ...`).
    Comment,
    /// A `KEY=value` assignment with its decoded value.
    Entry { key: String, value: String },
}

/// One physical line of an env file after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// 1-indexed position in the file.
    pub line_number: usize,
    /// The line exactly as read, without its line terminator.
    pub raw: String,
    pub kind: LineKind,
}

impl ParsedLine {
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, LineKind::Comment)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, LineKind::Empty)
    }

    pub fn key(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Entry { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Entry { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// A parsed env file: the folded variables plus every line record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
    pub vars: VariableMap,
    pub lines: Vec<ParsedLine>,
}

impl ParsedFile {
    /// Fold line records into a file, last assignment of a key winning.
    pub fn from_lines(lines: Vec<ParsedLine>) -> Self {
        let mut vars = VariableMap::new();
        for line in &lines {
            if let LineKind::Entry { key, value } = &line.kind {
                vars.insert(key.as_str(), value.as_str());
            }
        }
        Self { vars, lines }
    }
}
