use tracing::trace;

use crate::core::models::parsed_line::{LineKind, ParsedLine};
use crate::core::traits::parser::ConfigParser;

const COMMENT_PREFIX: char = '#';
const EXPORT_PREFIX: &str = "export ";
const INLINE_COMMENT: &str = " #";

/// Parses `.env` files.
///
/// Supports:
/// - `KEY=value` entries, split on the first `=`
/// - An optional `export ` prefix
/// - Double-quoted values with `\n \r \t \" \\` escapes
/// - Single-quoted values, taken literally
/// - Full-line comments (`# ...`) and ` #` inline comments on unquoted values
/// - Blank lines
///
/// A non-comment line without `=` is treated as empty instead of failing.
pub struct DotenvParser;

impl ConfigParser for DotenvParser {
    fn parse_line(&self, raw: &str, line_number: usize) -> ParsedLine {
        let trimmed = raw.trim();

        let kind = if trimmed.is_empty() {
            LineKind::Empty
        } else if trimmed.starts_with(COMMENT_PREFIX) {
            LineKind::Comment
        } else {
            let content = trimmed.strip_prefix(EXPORT_PREFIX).unwrap_or(trimmed);

            match content.split_once('=') {
                Some((key, raw_value)) => LineKind::Entry {
                    key: key.trim().to_string(),
                    value: decode_value(raw_value),
                },
                None => {
                    trace!(line_number, "no '=' found, treating line as empty");
                    LineKind::Empty
                }
            }
        };

        ParsedLine {
            line_number,
            raw: raw.to_string(),
            kind,
        }
    }
}

/// Decode the text after the first `=`.
///
/// A value opening with a quote that is never closed is handled as if it
/// were unquoted, leading quote included.
fn decode_value(raw: &str) -> String {
    if let Some((quote, body)) = quoted_body(raw) {
        return match quote {
            '"' => unescape(body),
            _ => body.to_string(),
        };
    }

    let value = match raw.find(INLINE_COMMENT) {
        Some(pos) => &raw[..pos],
        None => raw,
    };
    value.trim().to_string()
}

/// If `raw` opens with `"` or `'`, return the quote and the text up to the
/// matching unescaped closing quote. A backslash escapes whatever follows it,
/// so `\"` does not close the value and `\\"` does.
fn quoted_body(raw: &str) -> Option<(char, &str)> {
    let quote = raw.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let body = &raw[quote.len_utf8()..];

    let mut escaped = false;
    for (pos, c) in body.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some((quote, &body[..pos]));
        }
    }

    None
}

/// Decode double-quote escapes in a single left-to-right pass.
/// Unknown escapes and a trailing lone backslash are kept as written.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
