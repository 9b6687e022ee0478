//! # Parser
//!
//! Recursive descent over the token vector with backtracking. Rules are
//! built from small combinators (see [`BoxedParser`]); a rule that does not
//! match rewinds the cursor so the next alternative can try, while a rule
//! that fails past a point of no return raises a committed [`ParseError`].

mod combinators;
mod grammar;
mod state;

pub use combinators::*;
pub use grammar::*;
pub use state::{ParseError, ParseResult, ParseState, Parser};
