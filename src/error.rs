//! # Pipeline errors
//!
//! Each stage reports failures with its own error type. [`Error`] wraps
//! them so the composed operations in the crate root can use `?` across
//! stage boundaries. Type mismatches are not errors: the checker returns
//! them as a list.

use std::fmt;

use crate::degree::DegreeError;
use crate::interpreter::RuntimeError;
use crate::lexer::LexError;
use crate::parser::ParseError;

#[derive(Debug, Clone)]
pub enum Error {
    Lex(LexError),
    Parse(ParseError),
    Runtime(RuntimeError),
    Degree(DegreeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(err) => write!(f, "lexical error: {err}"),
            Error::Parse(err) => write!(f, "syntax error: {err}"),
            Error::Runtime(err) => write!(f, "runtime error: {err}"),
            Error::Degree(err) => write!(f, "degree error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Runtime(err) => Some(err),
            Error::Degree(err) => Some(err),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<RuntimeError> for Error {
    fn from(err: RuntimeError) -> Self {
        Error::Runtime(err)
    }
}

impl From<DegreeError> for Error {
    fn from(err: DegreeError) -> Self {
        Error::Degree(err)
    }
}
