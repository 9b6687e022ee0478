//! # Virtual machine
//!
//! Executes the instruction list produced by [`crate::compiler`] on a single
//! value stack. Plain operands are pushed; operation tags pop what they need
//! and push their result. The program's value is whatever number is left on
//! top of the stack at the end.
//!
//! User functions are closures over their parameter list and compiled body.
//! Every call runs in a fresh [`Frame`]: the callee cannot see the caller's
//! locals, and it starts with no user functions of its own.

mod error;
mod machine;
mod scope;
mod value;

pub use error::RuntimeError;
pub use machine::Machine;
pub use scope::{Frame, Locals};
pub use value::{Closure, StackValue};

use crate::compiler::Instruction;

/// Run `instructions` with no call-depth limit.
pub fn run(instructions: &[Instruction], locals: Locals) -> Result<f64, RuntimeError> {
    Machine::new().run(instructions, locals)
}
