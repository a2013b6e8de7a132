//! Reader for module descriptor files (`__manifest__.py`).
//!
//! A descriptor holds a single Python dictionary literal. The parser below
//! accepts only literal structure (strings, numbers, booleans, None, lists,
//! tuples, nested dicts) and rejects everything else, so descriptor content
//! is never executed.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    None,
    List(Vec<Literal>),
    Dict(Vec<(String, Literal)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub offset: usize,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.message, self.offset)
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug)]
pub enum ManifestError {
    Io(io::Error),
    Parse(ParseError),
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Io(e) => write!(f, "{e}"),
            ManifestError::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ManifestError {}

/// Parsed descriptor with typed access to the keys the checks care about.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    entries: Vec<(String, Literal)>,
}

impl Manifest {
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        match parse_literal(content)? {
            Literal::Dict(entries) => Ok(Self { entries }),
            _ => Err(ParseError {
                offset: 0,
                message: "descriptor is not a dictionary literal".to_string(),
            }),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(ManifestError::Io)?;
        Self::parse(&content).map_err(ManifestError::Parse)
    }

    pub fn get(&self, key: &str) -> Option<&Literal> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// String value for `key`, or `""` when the key is absent or holds a
    /// non-string value.
    pub fn get_str(&self, key: &str) -> &str {
        match self.get(key) {
            Some(Literal::Str(s)) => s,
            _ => "",
        }
    }

    pub fn version(&self) -> &str {
        self.get_str("version")
    }

    pub fn author(&self) -> &str {
        self.get_str("author")
    }
}

/// Parse a full input as a single Python literal expression.
pub fn parse_literal(input: &str) -> Result<Literal, ParseError> {
    let mut parser = Parser {
        bytes: input.as_bytes(),
        pos: 0,
    };
    parser.skip_trivia();
    let value = parser.parse_value()?;
    parser.skip_trivia();
    if parser.pos != parser.bytes.len() {
        return Err(parser.error("unexpected trailing content"));
    }
    Ok(value)
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn error(&self, message: &str) -> ParseError {
        ParseError {
            offset: self.pos,
            message: message.to_string(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Skip whitespace, `#` comments, and backslash line continuations.
    fn skip_trivia(&mut self) {
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\r' | b'\n' => self.pos += 1,
                b'#' => {
                    while self.peek().is_some_and(|b| b != b'\n') {
                        self.pos += 1;
                    }
                }
                b'\\' if self.bytes.get(self.pos + 1) == Some(&b'\n') => self.pos += 2,
                _ => break,
            }
        }
    }

    fn parse_value(&mut self) -> Result<Literal, ParseError> {
        match self.peek() {
            Some(b'{') => self.parse_dict(),
            Some(b'[') => self.parse_seq(b'[', b']'),
            Some(b'(') => self.parse_seq(b'(', b')'),
            Some(b'\'') | Some(b'"') => self.parse_string_group().map(Literal::Str),
            Some(b) if b == b'-' || b == b'+' || b.is_ascii_digit() => self.parse_number(),
            Some(_) => self.parse_keyword(),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_keyword(&mut self) -> Result<Literal, ParseError> {
        for (word, value) in [
            ("True", Literal::Bool(true)),
            ("False", Literal::Bool(false)),
            ("None", Literal::None),
        ] {
            if self.bytes[self.pos..].starts_with(word.as_bytes()) {
                let after = self.bytes.get(self.pos + word.len()).copied();
                if !after.is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_') {
                    self.pos += word.len();
                    return Ok(value);
                }
            }
        }
        Err(self.error("expected a literal value"))
    }

    fn parse_number(&mut self) -> Result<Literal, ParseError> {
        let start = self.pos;
        if matches!(self.peek(), Some(b'-') | Some(b'+')) {
            self.pos += 1;
        }
        let mut is_float = false;
        while let Some(b) = self.peek() {
            match b {
                b'0'..=b'9' => self.pos += 1,
                b'.' | b'e' | b'E' => {
                    is_float = true;
                    self.pos += 1;
                    if matches!(self.peek(), Some(b'-') | Some(b'+')) {
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos])
            .map_err(|_| self.error("invalid number"))?;
        if is_float {
            text.parse()
                .map(Literal::Float)
                .map_err(|_| self.error("invalid number"))
        } else {
            text.parse()
                .map(Literal::Int)
                .map_err(|_| self.error("invalid number"))
        }
    }

    /// One or more adjacent string literals, concatenated the way Python
    /// joins them (descriptors commonly split long descriptions this way).
    fn parse_string_group(&mut self) -> Result<String, ParseError> {
        let mut out = self.parse_string()?;
        loop {
            let save = self.pos;
            self.skip_trivia();
            if matches!(self.peek(), Some(b'\'') | Some(b'"')) {
                out.push_str(&self.parse_string()?);
            } else {
                self.pos = save;
                return Ok(out);
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        let quote = self.peek().ok_or_else(|| self.error("expected a string"))?;
        let triple = self.bytes[self.pos..].starts_with(&[quote, quote, quote]);
        self.pos += if triple { 3 } else { 1 };

        let mut out = String::new();
        loop {
            let b = self
                .peek()
                .ok_or_else(|| self.error("unterminated string literal"))?;
            if b == b'\\' {
                self.pos += 1;
                let escaped = self
                    .peek()
                    .ok_or_else(|| self.error("unterminated escape sequence"))?;
                match escaped {
                    b'n' => out.push('\n'),
                    b't' => out.push('\t'),
                    b'r' => out.push('\r'),
                    b'0' => out.push('\0'),
                    b'\\' | b'\'' | b'"' => out.push(escaped as char),
                    b'\n' => {} // escaped newline joins lines
                    other => {
                        // Python leaves unknown escapes intact
                        out.push('\\');
                        out.push(other as char);
                    }
                }
                self.pos += 1;
                continue;
            }
            if triple {
                if self.bytes[self.pos..].starts_with(&[quote, quote, quote]) {
                    self.pos += 3;
                    return Ok(out);
                }
            } else {
                if b == quote {
                    self.pos += 1;
                    return Ok(out);
                }
                if b == b'\n' {
                    return Err(self.error("newline inside string literal"));
                }
            }
            // copy the full UTF-8 sequence for multibyte characters
            let rest = &self.bytes[self.pos..];
            let ch_len = match std::str::from_utf8(rest) {
                Ok(s) => s.chars().next().map_or(1, |c| c.len_utf8()),
                Err(e) if e.valid_up_to() > 0 => {
                    let s = std::str::from_utf8(&rest[..e.valid_up_to()]).unwrap_or("");
                    s.chars().next().map_or(1, |c| c.len_utf8())
                }
                Err(_) => return Err(self.error("invalid UTF-8 in string literal")),
            };
            out.push_str(std::str::from_utf8(&rest[..ch_len]).unwrap_or("\u{fffd}"));
            self.pos += ch_len;
        }
    }

    fn parse_seq(&mut self, open: u8, close: u8) -> Result<Literal, ParseError> {
        debug_assert_eq!(self.peek(), Some(open));
        self.pos += 1;
        let mut items = Vec::new();
        loop {
            self.skip_trivia();
            if self.peek() == Some(close) {
                self.pos += 1;
                return Ok(Literal::List(items));
            }
            items.push(self.parse_value()?);
            self.skip_trivia();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b) if b == close => {
                    self.pos += 1;
                    return Ok(Literal::List(items));
                }
                _ => return Err(self.error("expected ',' or closing bracket")),
            }
        }
    }

    fn parse_dict(&mut self) -> Result<Literal, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'{'));
        self.pos += 1;
        let mut entries = Vec::new();
        loop {
            self.skip_trivia();
            if self.peek() == Some(b'}') {
                self.pos += 1;
                return Ok(Literal::Dict(entries));
            }
            if !matches!(self.peek(), Some(b'\'') | Some(b'"')) {
                return Err(self.error("dictionary keys must be string literals"));
            }
            let key = self.parse_string_group()?;
            self.skip_trivia();
            if self.peek() != Some(b':') {
                return Err(self.error("expected ':' after dictionary key"));
            }
            self.pos += 1;
            self.skip_trivia();
            let value = self.parse_value()?;
            entries.push((key, value));
            self.skip_trivia();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Literal::Dict(entries));
                }
                _ => return Err(self.error("expected ',' or '}'")),
            }
        }
    }
}
