//! Grammar for the language
//!
//! This module contains all the parsing rules organized by category:
//! - `literal`: names and number literals
//! - `expression`: operator chains, values, calls
//! - `statement`: definitions, assignments, statement lists
//!
//! ```text
//! program    := stmt_list
//! stmt_list  := (statement (newline statement)*)?
//! statement  := define | assign | expression
//! define     := name "(" param_list? ")" "=" ("{" newline stmt_list "}" | statement)
//! assign     := name "=" expression
//! expression := term (("+" | "-") term)*
//! term       := power (("*" | "/" | "%") power)*
//! power      := value ("^" value)*
//! value      := "(" expression ")" | "-" expression | number name | call | name | number
//! ```

mod expression;
mod literal;
mod statement;

use crate::ast::Program;

use super::combinators::BoxedParser;
use super::state::{ParseResult, ParseState, Parser};

pub use expression::{call, expression, power, term, value};
pub use literal::{name, number, variable};
pub use statement::{assign, define, statement, stmt_list};

/// program := stmt_list
pub fn program() -> BoxedParser<Program> {
    stmt_list() >> Program::new
}

/// Parse a complete program. Every token has to be consumed.
pub fn parse(state: &mut ParseState) -> ParseResult<Program> {
    let program = program().parse(state)?;

    if state.has_next() {
        return Err(state.unexpected("newline or end of input"));
    }

    tracing::debug!(statements = program.stmts().len(), "parsed program");
    Ok(program)
}
