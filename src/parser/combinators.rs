use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use crate::lexer::{Token, TokenKind};

use super::state::{ParseResult, ParseState, Parser};

type ParserFn<T> = Rc<dyn Fn(&mut ParseState) -> ParseResult<T>>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(move |state| parser.parse(state)),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        (self.parser)(state)
    }
}

// === Combinators as methods ===

impl<T: 'static> BoxedParser<T> {
    /// Sequence: parse self then other, return (T, U)
    pub fn seq<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            let b = other.parse(state)?;
            Ok((a, b))
        })
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            let _ = other.parse(state)?;
            Ok(a)
        })
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| {
            let _ = self.parse(state)?;
            other.parse(state)
        })
    }

    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            Ok(f(a))
        })
    }

    /// Choice: try self, and on a plain failure rewind and try other.
    /// Committed failures are passed through untouched.
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let pos = state.position();
            match self.parse(state) {
                Err(err) if !err.is_committed() => {
                    state.restore(pos);
                    other.parse(state)
                }
                result => result,
            }
        })
    }

    /// Add a label to this parser for better error messages.
    /// Committed errors already say what was expected and are left alone.
    pub fn label(self, name: &'static str) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            self.parse(state).map_err(|mut err| {
                if !err.is_committed() {
                    err.expected = vec![name.to_string()];
                }
                err
            })
        })
    }

    /// Mark this parser as mandatory: if it fails, the whole parse fails.
    pub fn commit(self, name: &'static str) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let pos = state.position();
            self.parse(state).map_err(|err| {
                if err.is_committed() {
                    return err;
                }
                state.restore(pos);
                state.unexpected(name).commit()
            })
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Primitive Parsers ===

/// Consume the next token if it satisfies `predicate`
pub(crate) fn token_with_error<F: Fn(&Token) -> bool + 'static>(
    predicate: F,
    expected: &'static str,
) -> BoxedParser<Token> {
    BoxedParser::new(move |state: &mut ParseState| match state.peek() {
        Some(tok) if predicate(tok) => state
            .advance()
            .ok_or_else(|| state.unexpected(expected)),
        _ => Err(state.unexpected(expected)),
    })
}

fn expect_kind(kind: TokenKind, expected: &'static str) -> BoxedParser<Token> {
    token_with_error(move |t| t.kind == kind, expected)
}

pub fn expect_newline() -> BoxedParser<Token> {
    expect_kind(TokenKind::NewLine, "newline")
}

pub fn expect_plus() -> BoxedParser<Token> {
    expect_kind(TokenKind::Plus, "'+'")
}

pub fn expect_minus() -> BoxedParser<Token> {
    expect_kind(TokenKind::Minus, "'-'")
}

pub fn expect_times() -> BoxedParser<Token> {
    expect_kind(TokenKind::Times, "'*'")
}

pub fn expect_over() -> BoxedParser<Token> {
    expect_kind(TokenKind::Over, "'/'")
}

pub fn expect_mod() -> BoxedParser<Token> {
    expect_kind(TokenKind::Mod, "'%'")
}

pub fn expect_to_the() -> BoxedParser<Token> {
    expect_kind(TokenKind::ToThe, "'^'")
}

pub fn expect_comma() -> BoxedParser<Token> {
    expect_kind(TokenKind::Comma, "','")
}

pub fn expect_equals() -> BoxedParser<Token> {
    expect_kind(TokenKind::Equals, "'='")
}

pub fn expect_lbrace() -> BoxedParser<Token> {
    expect_kind(TokenKind::LBrace, "'{'")
}

pub fn expect_rbrace() -> BoxedParser<Token> {
    expect_kind(TokenKind::RBrace, "'}'")
}

pub fn expect_lparen() -> BoxedParser<Token> {
    expect_kind(TokenKind::LParen, "'('")
}

pub fn expect_rparen() -> BoxedParser<Token> {
    expect_kind(TokenKind::RParen, "')'")
}

/// Optional: parse zero or one
pub fn optional<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let pos = state.position();
        match parser.parse(state) {
            Ok(item) => Ok(Some(item)),
            Err(err) if err.is_committed() => Err(err),
            Err(_) => {
                state.restore(pos);
                Ok(None)
            }
        }
    })
}
