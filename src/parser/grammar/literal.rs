//! Leaf parsers: names and number literals

use lachs::Span;

use crate::ast::Expression;
use crate::lexer::TokenKind;

use crate::parser::combinators::{BoxedParser, token_with_error};
use crate::parser::state::{ParseState, Parser};

/// name := [a-z][0-9a-zA-Z]*
pub fn name() -> BoxedParser<String> {
    spanned_name() >> |(name, _)| name
}

/// Like [`name`], also yielding where the name was written.
pub fn spanned_name() -> BoxedParser<(String, Span)> {
    let token = token_with_error(|t| matches!(t.kind, TokenKind::Name(_)), "name");

    BoxedParser::new(move |state: &mut ParseState| {
        let token = token.parse(state)?;
        let position = token.pos();
        match token.kind {
            TokenKind::Name(name) => Ok((name, position)),
            _ => Err(state.unexpected("name")),
        }
    })
}

/// number := radix literal | decimal literal
pub fn number() -> BoxedParser<Expression> {
    let token = token_with_error(|t| matches!(t.kind, TokenKind::Number { .. }), "number");

    BoxedParser::new(move |state: &mut ParseState| match token.parse(state)?.kind {
        TokenKind::Number { value, source } => Ok(Expression::literal(value, source)),
        _ => Err(state.unexpected("number")),
    })
}

/// variable := name
pub fn variable() -> BoxedParser<Expression> {
    name() >> Expression::variable
}
