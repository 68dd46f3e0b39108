use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),
    #[error("unterminated string")]
    UnterminatedString,
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscapeSequence(char),
    #[error("invalid unicode escape, expected 4 hex digits")]
    InvalidUnicodeEscape,
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("expected `{expected}`, found `{found}`")]
    InvalidLiteral {
        expected: &'static str,
        found: String,
    },
    #[error("expected `:`, found `{0}`")]
    ExpectedColon(char),
    #[error("expected `,` or `]`, found `{0}`")]
    ExpectedCommaOrCloseBracket(char),
    #[error("expected `,` or `}}`, found `{0}`")]
    ExpectedCommaOrCloseBrace(char),
    #[error("nesting depth exceeded limit of {0}")]
    NestingTooDeep(usize),
    #[error("trailing character `{0}` after value")]
    TrailingCharacters(char),
}

/// A terminal parse failure. `position` is the 0-based character offset
/// where the failure was detected.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("error at line {line}, position {position}: {kind}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub position: usize,
    pub line: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, position: usize, line: usize) -> Self {
        Self {
            kind,
            position,
            line,
        }
    }
}

/// Failure to resolve a path with [`Value::select`](crate::Value::select).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("key `{0}` not found")]
    MissingKey(String),
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("`{0}` is not a valid array index")]
    InvalidIndex(String),
    #[error("cannot select `{segment}` from {kind}")]
    NotAContainer {
        segment: String,
        kind: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = ParseError::new(ErrorKind::ExpectedColon('4'), 12, 3);
        assert_eq!(e.to_string(), "error at line 3, position 12: expected `:`, found `4`");

        let e = ParseError::new(ErrorKind::ExpectedCommaOrCloseBrace('x'), 0, 1);
        assert_eq!(
            e.to_string(),
            "error at line 1, position 0: expected `,` or `}`, found `x`"
        );

        let kind = ErrorKind::InvalidLiteral {
            expected: "true",
            found: "tru".to_string(),
        };
        assert_eq!(kind.to_string(), "expected `true`, found `tru`");
        assert_eq!(
            ErrorKind::InvalidEscapeSequence('x').to_string(),
            "invalid escape sequence `\\x`"
        );
    }
}
