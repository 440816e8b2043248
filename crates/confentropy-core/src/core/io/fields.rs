use std::io;
use std::str::FromStr;
use thiserror::Error;

/// How a log line is recognized as carrying a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// The line contains the phrase anywhere.
    Phrase(&'static str),
    /// One of the line's whitespace-separated tokens equals the keyword exactly.
    Token(&'static str),
    /// Every line qualifies; used for lines whose position alone identifies them.
    Any,
}

impl Marker {
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Self::Phrase(phrase) => line.contains(phrase),
            Self::Token(keyword) => line.split_whitespace().any(|t| t == *keyword),
            Self::Any => true,
        }
    }
}

/// A named scalar located by a marker and a zero-based whitespace-token position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogField {
    pub name: &'static str,
    pub marker: Marker,
    pub token: usize,
}

impl LogField {
    pub const fn new(name: &'static str, marker: Marker, token: usize) -> Self {
        Self {
            name,
            marker,
            token,
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        self.marker.matches(line)
    }

    /// Parses the field's token out of `line`.
    ///
    /// `line_num` is only used to make errors point at the offending line.
    pub fn extract<T: FromStr>(&self, line: &str, line_num: usize) -> Result<T, LogError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let raw = tokens.get(self.token).ok_or(LogError::MissingToken {
            field: self.name,
            line: line_num,
            position: self.token + 1,
            found: tokens.len(),
        })?;
        raw.parse().map_err(|_| LogError::InvalidValue {
            field: self.name,
            line: line_num,
            value: raw.to_string(),
        })
    }
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(
        "Field '{field}' on line {line}: expected token {position}, but the line has only {found}"
    )]
    MissingToken {
        field: &'static str,
        line: usize,
        position: usize,
        found: usize,
    },
    #[error("Field '{field}' on line {line}: cannot parse '{value}'")]
    InvalidValue {
        field: &'static str,
        line: usize,
        value: String,
    },
    #[error("Log ended after {consumed} of {expected} expected lines (last line read: {line})")]
    UnexpectedEof {
        expected: usize,
        consumed: usize,
        line: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: LogField = LogField::new("sample", Marker::Phrase("total energy"), 3);

    #[test]
    fn phrase_marker_matches_substrings() {
        assert!(Marker::Phrase("partition function").matches("  temp. partition function  "));
        assert!(!Marker::Phrase("partition function").matches("partition"));
    }

    #[test]
    fn token_marker_requires_whole_token() {
        let marker = Marker::Token("TR");
        assert!(marker.matches("        TR     0.1E+28   888.1   4.968   38.9"));
        assert!(!marker.matches("CONTRIBUTIONS TO ENTROPY"));
        assert!(!marker.matches("STRUCTURE"));
    }

    #[test]
    fn extract_reads_token_at_position() {
        let value: f64 = SAMPLE.extract("the total energy -12.5 Eh", 4).unwrap();
        assert_eq!(value, -12.5);
    }

    #[test]
    fn extract_reports_missing_token_with_one_based_position() {
        let err = SAMPLE.extract::<f64>("total energy", 9).unwrap_err();
        match err {
            LogError::MissingToken {
                field,
                line,
                position,
                found,
            } => {
                assert_eq!(field, "sample");
                assert_eq!(line, 9);
                assert_eq!(position, 4);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn extract_reports_unparsable_value() {
        let err = SAMPLE.extract::<f64>("the total energy n/a", 2).unwrap_err();
        assert!(matches!(err, LogError::InvalidValue { ref value, .. } if value == "n/a"));
    }
}
