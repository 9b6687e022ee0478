//! # Mathlang - a small expression language
//!
//! Mathlang evaluates arithmetic programs with variables and user-defined
//! functions:
//!
//! ```text
//! f(x) = 2x^2 + x + 1
//! y = f(3)
//! y / 2
//! ```
//!
//! ## Architecture Overview
//!
//! Source text runs through a short pipeline:
//!
//! 1. **Lexer** (`lexer`) - Tokenizes source text with a single regular expression
//! 2. **Parser** (`parser`) - Builds the AST using combinator-based recursive descent
//! 3. **Optimizer** (`optimizer`) - Optionally folds constant sub-expressions
//! 4. **Compiler** (`compiler`) - Lowers the AST to postfix stack-machine instructions
//! 5. **Interpreter** (`interpreter`) - Runs the instructions on a value stack
//!
//! ```text
//! Source Code (&str)
//!     ↓
//! [Lexer] → Vec<Token>
//!     ↓
//! [Parser] → ast::Program
//!     ↓
//! [Optimizer] → ast::Program (optional)
//!     ↓
//! [Compiler] → Vec<Instruction>
//!     ↓
//! [Interpreter] → f64
//! ```
//!
//! Two more passes read the AST without affecting evaluation:
//!
//! - [`types`] - A structural check over a graph of type vertices. It reports
//!   mismatches as strings and never runs the program.
//! - [`degree`] - The polynomial degree of a one-variable function, for
//!   choosing how to plot it.
//!
//! ## Key Design Decisions
//!
//! ### Right-associative operators
//! Every operator chain groups to the right, `^` as well as `-` and `/`:
//! `8 - 4 - 2` is `8 - (4 - 2) = 6`.
//!
//! ### Implicit multiplication
//! A number directly followed by a name multiplies: `3x` is `3 * x`. The
//! pair binds tighter than any operator, so `2x^2` is `(2x)^2`.
//!
//! ### Fresh frames per call
//! A function call sees only its arguments. It cannot read the caller's
//! variables, and functions defined outside are not visible inside.
//!
//! ### Division by zero is an error
//! `1 / 0` fails with [`RuntimeError::DivisionByZero`] instead of yielding
//! infinity, with or without optimization.
//!
//! ## Module Structure
//!
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`lexer`] - Tokenization
//! - [`parser`] - Parsing using combinator-based grammar
//! - [`optimizer`] - Constant folding
//! - [`types`] - Type checking
//! - [`compiler`] - Lowering to instructions
//! - [`interpreter`] - The stack machine
//! - [`degree`] - Degree analysis
//! - [`fmt`] - Pretty-printing
//! - [`stdlib`] - Built-in functions
//!
//! ## Getting Started
//!
//! ```
//! use mathlang::{Options, evaluate};
//!
//! let value = evaluate("f(x) = 2x\nf(5)", &Options::default()).unwrap();
//! assert_eq!(value, 10.0);
//! ```

pub mod ast;
pub mod compiler;
pub mod degree;
pub mod error;
pub mod fmt;
pub mod interpreter;
pub mod lexer;
pub mod optimizer;
pub mod parser;
pub mod stdlib;
pub mod types;

pub use ast::{Define, Program};
pub use compiler::{Instruction, compile};
pub use degree::{DegreeError, degree};
pub use error::Error;
pub use interpreter::{Locals, Machine, RuntimeError, run};
pub use lexer::{LexError, Token, TokenKind, tokenize};
pub use optimizer::optimize;
pub use parser::{ParseError, ParseResult};
pub use types::type_check;

use parser::ParseState;

/// Settings shared by the composed operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Fold constants before compiling or formatting.
    pub optimize: bool,
    /// Fail calls to user functions nested deeper than this. Unbounded when `None`.
    pub max_call_depth: Option<usize>,
}

impl Options {
    pub fn optimized() -> Self {
        Self {
            optimize: true,
            ..Self::default()
        }
    }

    pub fn with_max_call_depth(mut self, limit: usize) -> Self {
        self.max_call_depth = Some(limit);
        self
    }
}

/// Parse a token vector into a program.
pub fn parse(tokens: Vec<Token>) -> ParseResult<Program> {
    let mut state = ParseState::new(tokens);
    parser::parse(&mut state)
}

/// Tokenize and parse `source`, optimizing when asked to.
pub fn parse_source(source: &str, options: &Options) -> Result<Program, Error> {
    let program = parse(tokenize(source)?)?;
    Ok(if options.optimize {
        optimize(program)
    } else {
        program
    })
}

/// Evaluate `source` and return the value of its last statement.
pub fn evaluate(source: &str, options: &Options) -> Result<f64, Error> {
    let program = parse_source(source, options)?;
    let instructions = compile(&program);
    let machine = Machine::new().with_max_call_depth(options.max_call_depth);
    Ok(machine.run(&instructions, Locals::new())?)
}

/// Reformat `source` into canonical form.
pub fn format(source: &str, options: &Options) -> Result<String, Error> {
    Ok(parse_source(source, options)?.to_string())
}

/// Type check `source`, returning one line per mismatch.
pub fn check_source(source: &str) -> Result<Vec<String>, Error> {
    Ok(type_check(&parse_source(source, &Options::default())?))
}

/// Call `define` with positional `args` bound to its parameters.
pub fn execute(define: &Define, args: &[f64]) -> Result<f64, Error> {
    if define.params.len() != args.len() {
        return Err(RuntimeError::Arity {
            name: define.name.clone(),
            expected: define.params.len(),
            found: args.len(),
        }
        .into());
    }

    let locals = define
        .params
        .names()
        .map(str::to_string)
        .zip(args.iter().copied())
        .collect();

    Ok(run(&compiler::compile_block(&define.body), locals)?)
}
