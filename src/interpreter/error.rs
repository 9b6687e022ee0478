use std::fmt;

/// Errors raised while running instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    DivisionByZero,
    UnknownFunction(String),
    UnknownVariable(String),
    Arity {
        name: String,
        expected: usize,
        found: usize,
    },
    CallDepthExceeded(usize),
    /// The instruction stream does not have the shape the compiler emits:
    /// a pop from an empty stack, or an operand of the wrong kind.
    MalformedProgram(String),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::DivisionByZero => f.write_str("division by zero"),
            RuntimeError::UnknownFunction(name) => write!(f, "unknown function '{name}'"),
            RuntimeError::UnknownVariable(name) => write!(f, "unknown variable '{name}'"),
            RuntimeError::Arity {
                name,
                expected,
                found,
            } => write!(
                f,
                "function '{name}' expects {expected} argument(s), got {found}"
            ),
            RuntimeError::CallDepthExceeded(limit) => {
                write!(f, "maximum call depth of {limit} exceeded")
            }
            RuntimeError::MalformedProgram(detail) => write!(f, "malformed program: {detail}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
