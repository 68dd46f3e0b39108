use crate::error::{ErrorKind, ParseError};
use std::str::Chars;

/// Character cursor over in-memory text with one character of pushback.
pub struct Cursor<'a> {
    chars: Chars<'a>,
    pushback: Option<char>,
    // number of characters handed out so far
    consumed: usize,
    line_number: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            pushback: None,
            consumed: 0,
            line_number: 1,
        }
    }
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.pushback.take().or_else(|| self.chars.next())?;
        self.consumed += 1;
        if ch == '\n' {
            self.line_number += 1;
        }
        Some(ch)
    }
    // at most one character may be pending
    pub fn unread(&mut self, ch: char) {
        debug_assert!(self.pushback.is_none());
        self.consumed -= 1;
        if ch == '\n' {
            self.line_number -= 1;
        }
        self.pushback = Some(ch);
    }
    pub fn next_significant(&mut self) -> Result<char, ParseError> {
        while let Some(ch) = self.next_char() {
            if !is_whitespace(ch) {
                return Ok(ch);
            }
        }
        Err(self.error(ErrorKind::UnexpectedEndOfInput))
    }
    /// Offset of the last character read, or 0 before the first read.
    pub fn position(&self) -> usize {
        self.consumed.saturating_sub(1)
    }
    pub fn line_number(&self) -> usize {
        self.line_number
    }
    pub fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.position(), self.line_number())
    }
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}
