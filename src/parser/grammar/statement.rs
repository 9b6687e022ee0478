//! Statement parsers

use crate::ast::{Define, Param, ParamList, Statement, StmtList};
use crate::stdlib::Builtin;

use crate::parser::combinators::{
    BoxedParser, expect_comma, expect_equals, expect_lbrace, expect_lparen, expect_newline,
    expect_rbrace, expect_rparen, optional,
};
use crate::parser::state::{ParseError, ParseState, Parser};

use super::expression::expression;
use super::literal::{name, spanned_name};

/// statement := define | assign | expression
pub fn statement() -> BoxedParser<Statement> {
    define() | assign() | (expression() >> Statement::Expression)
}

/// assign := name "=" expression
pub fn assign() -> BoxedParser<Statement> {
    ((name() - expect_equals()) + expression()) >> |(name, value)| Statement::assign(name, value)
}

/// param_list := name ("," param_list)?
///
/// A dangling comma makes the whole list fail softly, so `f(x, 1)` can still
/// be read as a call once the definition alternative gives up.
fn param_list() -> BoxedParser<Vec<Param>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let mut params = vec![Param::new(name().parse(state)?)];
        if optional(expect_comma()).parse(state)?.is_some() {
            params.extend(param_list().parse(state)?);
        }
        Ok(params)
    })
}

/// block := "{" newline stmt_list "}"
fn block() -> BoxedParser<StmtList> {
    expect_lbrace() * expect_newline() * stmt_list() - expect_rbrace()
}

/// define := name "(" param_list? ")" "=" (block | statement)
pub fn define() -> BoxedParser<Statement> {
    let signature =
        spanned_name() - expect_lparen() + optional(param_list()) - expect_rparen() - expect_equals();

    BoxedParser::new(move |state: &mut ParseState| {
        let ((name, position), params) = signature.parse(state)?;

        if Builtin::lookup(&name).is_some() {
            return Err(
                ParseError::new(format!("cannot redefine stdlib function '{name}'"))
                    .at(position)
                    .commit(),
            );
        }

        let inline = statement().commit("function body") >> |stmt| StmtList::new(vec![stmt]);
        let body = (block() | inline).parse(state)?;
        let params = ParamList::new(params.unwrap_or_default());

        Ok(Statement::Define(Define::new(name, params, body)))
    })
}

/// stmt_list := (statement (newline statement)*)?
pub fn stmt_list() -> BoxedParser<StmtList> {
    statements() >> StmtList::new
}

fn statements() -> BoxedParser<Vec<Statement>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let mut stmts = vec![];
        let Some(first) = optional(statement()).parse(state)? else {
            return Ok(stmts);
        };
        stmts.push(first);

        while optional(expect_newline()).parse(state)?.is_some() {
            match optional(statement()).parse(state)? {
                Some(stmt) => stmts.push(stmt),
                None => break,
            }
        }
        Ok(stmts)
    })
}
