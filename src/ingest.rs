//! Two-column CSV ingest.
//!
//! Input is plain text, one `text;value` pair per line. Parsing is lenient:
//! lines that do not hold exactly two non-empty fields are skipped without
//! error. There is no quoting, so a `;` inside the text splits the line and
//! the line is dropped.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TransformError};
use crate::record::FIELD_SEPARATOR;

/// A single input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub text: String,
    pub value: String,
}

impl Row {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// Whitespace trimmed from fields: Unicode spaces and line breaks plus the
/// byte-order mark U+FEFF. U+0085 is not included.
pub fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Parse one line, returning `None` if it is not a valid row.
pub fn parse_line(line: &str) -> Option<Row> {
    let fields: Vec<&str> = line
        .split(FIELD_SEPARATOR)
        .map(|field| field.trim_matches(is_space))
        .collect();
    match fields.as_slice() {
        [text, value] if !text.is_empty() && !value.is_empty() => Some(Row::new(*text, *value)),
        _ => None,
    }
}

/// Parse raw file content into rows, keeping input order.
pub fn parse_rows(content: &str) -> Vec<Row> {
    let mut lines = 0usize;
    let rows: Vec<Row> = content
        .split('\n')
        .inspect(|_| lines += 1)
        .filter_map(parse_line)
        .collect();
    debug!(lines, kept = rows.len(), dropped = lines - rows.len(), "parsed csv");
    rows
}

/// Read and parse a CSV file from disk, skipping a leading byte-order mark.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let content = fs::read_to_string(path).map_err(|source| TransformError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_rows(content.strip_prefix('\u{FEFF}').unwrap_or(&content)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_malformed_lines() {
        let rows = parse_rows("a;1\nb;2;3\n;4\nc;5\n");
        assert_eq!(rows, vec![Row::new("a", "1"), Row::new("c", "5")]);
    }

    #[test]
    fn test_parse_trims_fields() {
        let rows = parse_rows("  KMT\\242\\B ;  7 \r\n");
        assert_eq!(rows, vec![Row::new("KMT\\242\\B", "7")]);
    }

    #[test]
    fn test_trim_set() {
        assert_eq!(parse_line("\u{FEFF}AB;\u{A0}1\u{3000}"), Some(Row::new("AB", "1")));
        assert_eq!(parse_line("\u{85}AB;1"), Some(Row::new("\u{85}AB", "1")));
    }

    #[test]
    fn test_parse_empty_and_blank() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("\n\n   \n").is_empty());
    }

    #[test]
    fn test_parse_line_rejects_empty_value() {
        assert_eq!(parse_line("abc;"), None);
        assert_eq!(parse_line("abc;   "), None);
        assert_eq!(parse_line("abc"), None);
        assert_eq!(parse_line("abc;1"), Some(Row::new("abc", "1")));
    }

    #[test]
    fn test_quoted_separator_is_not_supported() {
        assert!(parse_rows("\"a;b\";1").is_empty());
    }
}
