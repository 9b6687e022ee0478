//! Expression parsers
//!
//! Every binary chain is right-associative: a rule collects its operands and
//! operators in one pass and then folds them from the right, so
//! `1 - 2 - 3` reads as `1 - (2 - 3)`.

use crate::ast::{BinOpKind, Expression};

use crate::parser::combinators::{
    BoxedParser, expect_comma, expect_lparen, expect_minus, expect_mod, expect_over, expect_plus,
    expect_rparen, expect_times, expect_to_the, optional,
};
use crate::parser::state::{ParseState, Parser};

use super::literal::{name, number, variable};

/// Parse `operand (operator operand)*` and fold it into right-nested binary
/// nodes. An operand is mandatory after every operator.
fn right_chain(
    operand: fn() -> BoxedParser<Expression>,
    operator: fn() -> BoxedParser<BinOpKind>,
    what: &'static str,
) -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let first = operand().parse(state)?;

        let mut rest = vec![];
        while let Some(op) = optional(operator()).parse(state)? {
            rest.push((op, operand().commit(what).parse(state)?));
        }

        let Some((mut pending, mut right)) = rest.pop() else {
            return Ok(first);
        };
        for (op, left) in rest.into_iter().rev() {
            right = Expression::binary(pending, left, right);
            pending = op;
        }
        Ok(Expression::binary(pending, first, right))
    })
}

fn additive() -> BoxedParser<BinOpKind> {
    (expect_plus() >> |_| BinOpKind::Add) | (expect_minus() >> |_| BinOpKind::Subtract)
}

fn multiplicative() -> BoxedParser<BinOpKind> {
    (expect_times() >> |_| BinOpKind::Multiply)
        | (expect_over() >> |_| BinOpKind::Divide)
        | (expect_mod() >> |_| BinOpKind::Modulo)
}

fn exponential() -> BoxedParser<BinOpKind> {
    expect_to_the() >> |_| BinOpKind::Exponentiate
}

/// expression := term (("+" | "-") term)*
pub fn expression() -> BoxedParser<Expression> {
    right_chain(term, additive, "expression")
}

/// term := power (("*" | "/" | "%") power)*
pub fn term() -> BoxedParser<Expression> {
    right_chain(power, multiplicative, "term")
}

/// power := value ("^" value)*
pub fn power() -> BoxedParser<Expression> {
    right_chain(value, exponential, "power")
}

/// value := "(" expression ")" | "-" expression | number name | call | name | number
pub fn value() -> BoxedParser<Expression> {
    let grouped = expect_lparen() * expression() - expect_rparen();
    let negated = expect_minus() * expression() >> Expression::negate;
    let juxtaposed = (number() + name())
        >> |(coefficient, name)| {
            Expression::binary(BinOpKind::Multiply, coefficient, Expression::variable(name))
        };

    (grouped | negated | juxtaposed | call() | variable() | number()).label("value")
}

/// call := name "(" arg_list? ")"
pub fn call() -> BoxedParser<Expression> {
    (name() - expect_lparen() + optional(arg_list()) - expect_rparen())
        >> |(name, args)| Expression::call(name, args.unwrap_or_default())
}

/// arg_list := expression ("," arg_list)?
fn arg_list() -> BoxedParser<Vec<Expression>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let mut args = vec![expression().parse(state)?];
        if optional(expect_comma()).parse(state)?.is_some() {
            args.extend(arg_list().commit("argument").parse(state)?);
        }
        Ok(args)
    })
}
