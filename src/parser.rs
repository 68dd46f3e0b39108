use crate::ast::{Map, Number, Value};
use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::options::ParserOptions;
use tracing::{debug, trace};

/// Parses `text` with the default [`ParserOptions`].
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_with(text, &ParserOptions::default())
}

pub fn parse_with(text: &str, options: &ParserOptions) -> Result<Value, ParseError> {
    Parser::new(text, *options).parse()
}

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParserOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str, options: ParserOptions) -> Self {
        Self {
            cursor: Cursor::new(text),
            options,
            depth: 0,
        }
    }
    /// Reads one value. Unless `reject_trailing` is set, whatever follows it is ignored.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        let first = self.cursor.next_significant()?;
        let value = self.parse_value(first)?;
        if self.options.reject_trailing {
            if let Ok(ch) = self.cursor.next_significant() {
                return Err(self.cursor.error(ErrorKind::TrailingCharacters(ch)));
            }
        }
        debug!(
            kind = value.kind(),
            chars = self.cursor.position() + 1,
            "parsed json value"
        );
        Ok(value)
    }
    fn error(&self, kind: ErrorKind) -> ParseError {
        self.cursor.error(kind)
    }
    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(self.error(ErrorKind::NestingTooDeep(self.options.max_depth)));
        }
        self.depth += 1;
        Ok(())
    }
    // `first` has already been consumed
    fn parse_value(&mut self, first: char) -> Result<Value, ParseError> {
        trace!(position = self.cursor.position(), "dispatch on `{}`", first);
        match first {
            '"' => self.parse_string().map(Value::String),
            '-' | '0'..='9' => self.parse_number(first).map(Value::Number),
            '{' => self.parse_object(),
            '[' => self.parse_array(),
            't' => self.parse_literal("true").map(|_| Value::Bool(true)),
            'f' => self.parse_literal("false").map(|_| Value::Bool(false)),
            'n' => self.parse_literal("null").map(|_| Value::Null),
            other => Err(self.error(ErrorKind::UnexpectedCharacter(other))),
        }
    }
    fn parse_literal(&mut self, expected: &'static str) -> Result<(), ParseError> {
        let mut found = String::from(&expected[..1]);
        for want in expected.chars().skip(1) {
            let ch = self.cursor.next_char();
            found.extend(ch);
            if ch != Some(want) {
                return Err(self.error(ErrorKind::InvalidLiteral { expected, found }));
            }
        }
        Ok(())
    }
    // the opening quote has already been consumed
    fn parse_string(&mut self) -> Result<String, ParseError> {
        let mut s = String::new();
        // pending \uXXXX code units, decoded together so surrogate pairs combine
        let mut units: Vec<u16> = Vec::new();
        loop {
            let ch = self.next_in_string()?;
            if ch == '\\' {
                let escaped = self.next_in_string()?;
                if escaped == 'u' {
                    units.push(self.parse_unicode_escape()?);
                    continue;
                }
                flush_utf16(&mut units, &mut s);
                let unescaped = match escaped {
                    '"' => '"',
                    '\\' => '\\',
                    '/' => '/',
                    'b' => '\u{8}',
                    'f' => '\u{c}',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    other => return Err(self.error(ErrorKind::InvalidEscapeSequence(other))),
                };
                s.push(unescaped);
            } else {
                flush_utf16(&mut units, &mut s);
                if ch == '"' {
                    break;
                }
                s.push(ch);
            }
        }
        Ok(s)
    }
    fn next_in_string(&mut self) -> Result<char, ParseError> {
        self.cursor
            .next_char()
            .ok_or_else(|| self.error(ErrorKind::UnterminatedString))
    }
    fn parse_unicode_escape(&mut self) -> Result<u16, ParseError> {
        let mut unit: u16 = 0;
        for _ in 0..4 {
            let digit = self
                .cursor
                .next_char()
                .and_then(|ch| ch.to_digit(16))
                .ok_or_else(|| self.error(ErrorKind::InvalidUnicodeEscape))?;
            unit = unit * 16 + digit as u16;
        }
        Ok(unit)
    }
    fn parse_number(&mut self, first: char) -> Result<Number, ParseError> {
        let mut lexeme = String::new();
        lexeme.push(first);
        while let Some(ch) = self.cursor.next_char() {
            if is_number_char(ch) {
                lexeme.push(ch);
            } else {
                // the delimiter belongs to the enclosing reader
                self.cursor.unread(ch);
                break;
            }
        }
        if !is_valid_number(&lexeme) {
            return Err(self.error(ErrorKind::InvalidNumber(lexeme)));
        }
        let number = if lexeme.contains(|ch: char| matches!(ch, '.' | 'e' | 'E')) {
            lexeme.parse::<f64>().map(Number::Float).ok()
        } else {
            lexeme
                .parse::<i32>()
                .map(Number::Int)
                .or_else(|_| lexeme.parse::<i64>().map(Number::Long))
                .ok()
        };
        number.ok_or_else(|| self.error(ErrorKind::InvalidNumber(lexeme)))
    }
    // the opening bracket has already been consumed
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        let mut values = vec![];
        let mut ch = self.cursor.next_significant()?;
        if ch != ']' {
            loop {
                values.push(self.parse_value(ch)?);
                match self.cursor.next_significant()? {
                    ',' => ch = self.cursor.next_significant()?,
                    ']' => break,
                    other => return Err(self.error(ErrorKind::ExpectedCommaOrCloseBracket(other))),
                }
            }
        }
        self.depth -= 1;
        Ok(Value::Array(values))
    }
    // the opening brace has already been consumed
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        let mut map = Map::new();
        let mut ch = self.cursor.next_significant()?;
        if ch != '}' {
            loop {
                if ch != '"' {
                    return Err(self.error(ErrorKind::UnexpectedCharacter(ch)));
                }
                let key = self.parse_string()?;
                match self.cursor.next_significant()? {
                    ':' => {}
                    other => return Err(self.error(ErrorKind::ExpectedColon(other))),
                }
                let first = self.cursor.next_significant()?;
                let value = self.parse_value(first)?;
                // a repeated key keeps its first position and takes the last value
                map.insert(key, value);
                match self.cursor.next_significant()? {
                    ',' => ch = self.cursor.next_significant()?,
                    '}' => break,
                    other => return Err(self.error(ErrorKind::ExpectedCommaOrCloseBrace(other))),
                }
            }
        }
        self.depth -= 1;
        Ok(Value::Object(map))
    }
}

fn flush_utf16(units: &mut Vec<u16>, s: &mut String) {
    if units.is_empty() {
        return;
    }
    s.extend(
        char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-')
}

// -?digits(.digits)?([eE][+-]?digits)?
fn is_valid_number(lexeme: &str) -> bool {
    let bytes = lexeme.as_bytes();
    let digits = |i: &mut usize| {
        let start = *i;
        while bytes.get(*i).map_or(false, u8::is_ascii_digit) {
            *i += 1;
        }
        *i > start
    };
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    if !digits(&mut i) {
        return false;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if !digits(&mut i) {
            return false;
        }
    }
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        if !digits(&mut i) {
            return false;
        }
    }
    i == bytes.len()
}
