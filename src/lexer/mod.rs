//! # Lexer
//!
//! Turns source text into a flat vector of [`Token`]s. Scanning is driven by
//! a single compiled pattern whose alternatives are tried in priority order:
//!
//! 1. a run of newlines (together with the blank lines and indentation after it)
//! 2. a run of other whitespace, which is discarded
//! 3. a single operator or punctuation character
//! 4. a non-decimal number literal (`0b101`, `0o17`, `0xff`)
//! 5. a decimal number literal (`12`, `1,000,000`, `3.14`, `10.1e2`)
//! 6. a name (`[a-z][0-9a-zA-Z]*`)
//!
//! Every byte of the (trimmed) input has to be covered by some match. A gap
//! between two matches, or input left over after the last one, is reported as
//! a [`LexError`] pointing at the first character nothing could consume.

use std::fmt;
use std::sync::LazyLock;

use lachs::Span;
use regex::{Captures, Regex};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<newline>\n\s*)",
        r"|(?P<whitespace>[^\S\n]+)",
        r"|(?P<mapped>[,={}()\-%/+*^])",
        r"|(?P<radix>0(?:b[01]+|o[0-7]+|x[0-9a-f]+))",
        r"|(?P<decimal>(?P<digits>[0-9]+(?:,[0-9]{3})*(?:\.[0-9]+)?)(?:[Ee](?P<power>[0-9]+))?)",
        r"|(?P<name>[a-z][0-9a-zA-Z]*)",
    ))
    .expect("token pattern is a valid regular expression")
});

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A numeric literal together with the text it was written as.
    Number { value: f64, source: String },
    Name(String),
    NewLine,
    Plus,
    Minus,
    Times,
    Over,
    Mod,
    ToThe,
    Comma,
    Equals,
    LBrace,
    RBrace,
    LParen,
    RParen,
}

impl TokenKind {
    fn mapped(symbol: &str) -> Option<Self> {
        let kind = match symbol {
            "+" => TokenKind::Plus,
            "-" => TokenKind::Minus,
            "*" => TokenKind::Times,
            "/" => TokenKind::Over,
            "%" => TokenKind::Mod,
            "^" => TokenKind::ToThe,
            "," => TokenKind::Comma,
            "=" => TokenKind::Equals,
            "{" => TokenKind::LBrace,
            "}" => TokenKind::RBrace,
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            _ => return None,
        };
        Some(kind)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    /// Line and column range of the token; its `source` holds only the
    /// token's own text.
    pub position: Span,
    /// Byte offset of the token's first character in the trimmed source.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: Span, offset: usize) -> Self {
        Self {
            kind,
            position,
            offset,
        }
    }

    pub fn pos(&self) -> Span {
        self.position.clone()
    }

    /// Zero-based line of the token's first character.
    pub fn line(&self) -> usize {
        self.position.start.0
    }

    /// Zero-based column of the token's first character.
    pub fn column(&self) -> usize {
        self.position.start.1
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Number { source, .. } => format!("number '{source}'"),
            TokenKind::Name(name) => format!("name '{name}'"),
            TokenKind::NewLine => "newline".to_string(),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Times => "'*'".to_string(),
            TokenKind::Over => "'/'".to_string(),
            TokenKind::Mod => "'%'".to_string(),
            TokenKind::ToThe => "'^'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Equals => "'='".to_string(),
            TokenKind::LBrace => "'{'".to_string(),
            TokenKind::RBrace => "'}'".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No token pattern matches at this character.
    UnexpectedCharacter {
        character: char,
        offset: usize,
        line: usize,
        column: usize,
    },
    /// A literal matched the number pattern but could not be converted.
    InvalidNumber {
        literal: String,
        line: usize,
        column: usize,
    },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter {
                character,
                line,
                column,
                ..
            } => write!(
                f,
                "Unable to parse: '{character}' at {}:{}",
                line + 1,
                column + 1
            ),
            LexError::InvalidNumber {
                literal,
                line,
                column,
            } => write!(
                f,
                "invalid number literal '{literal}' at {}:{}",
                line + 1,
                column + 1
            ),
        }
    }
}

impl std::error::Error for LexError {}

/// Where the scanner currently stands in the source.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    offset: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        self.offset += text.len();
    }

    fn unexpected(&self, source: &str) -> LexError {
        LexError::UnexpectedCharacter {
            character: source[self.offset..].chars().next().unwrap_or('\0'),
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }
}

/// Tokenize `source` eagerly. Leading and trailing whitespace is ignored.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let source = source.trim();
    let mut tokens = Vec::new();
    let mut cursor = Cursor::default();

    for captures in PATTERN.captures_iter(source) {
        let Some(whole) = captures.get(0) else {
            continue;
        };

        if whole.start() > cursor.offset {
            return Err(cursor.unexpected(source));
        }

        let start = cursor;
        let kind = classify(&captures, &start)?;
        cursor.advance(whole.as_str());

        if let Some(kind) = kind {
            let position = Span {
                start: (start.line, start.column),
                end: (cursor.line, cursor.column),
                source: whole.as_str().to_string(),
            };
            tokens.push(Token::new(kind, position, start.offset));
        }
    }

    if cursor.offset < source.len() {
        return Err(cursor.unexpected(source));
    }

    tracing::debug!(tokens = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Turn one pattern match into a token kind; `None` means the match is skipped.
fn classify(captures: &Captures<'_>, at: &Cursor) -> Result<Option<TokenKind>, LexError> {
    if captures.name("newline").is_some() {
        return Ok(Some(TokenKind::NewLine));
    }

    if captures.name("whitespace").is_some() {
        return Ok(None);
    }

    if let Some(symbol) = captures.name("mapped") {
        return Ok(TokenKind::mapped(symbol.as_str()));
    }

    if let Some(literal) = captures.name("radix") {
        let source = literal.as_str().to_string();
        let value = radix_value(&source);
        return Ok(Some(TokenKind::Number { value, source }));
    }

    if let Some(literal) = captures.name("decimal") {
        let digits = captures.name("digits").map_or("", |m| m.as_str());
        let power = captures.name("power").map(|m| m.as_str());
        let source = literal.as_str().to_string();

        let value = decimal_value(digits, power).ok_or_else(|| LexError::InvalidNumber {
            literal: source.clone(),
            line: at.line,
            column: at.column,
        })?;
        return Ok(Some(TokenKind::Number { value, source }));
    }

    Ok(captures
        .name("name")
        .map(|name| TokenKind::Name(name.as_str().to_string())))
}

/// Value of a `0b`/`0o`/`0x` literal. Digits are folded into a float so that
/// arbitrarily long literals saturate instead of overflowing.
fn radix_value(literal: &str) -> f64 {
    let radix = match literal.as_bytes().get(1) {
        Some(b'b') => 2,
        Some(b'o') => 8,
        _ => 16,
    };

    literal[2..]
        .chars()
        .filter_map(|ch| ch.to_digit(radix))
        .fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit))
}

fn decimal_value(digits: &str, power: Option<&str>) -> Option<f64> {
    let mut text = digits.replace(',', "");
    if let Some(power) = power {
        text.push('e');
        text.push_str(power);
    }
    text.parse().ok()
}
