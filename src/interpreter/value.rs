use crate::compiler::Instruction;

/// A value on the machine's stack
#[derive(Debug, Clone, PartialEq)]
pub enum StackValue<'a> {
    Number(f64),
    Name(String),
    Block(&'a [Instruction]),
}

impl StackValue<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            StackValue::Number(_) => "number",
            StackValue::Name(_) => "name",
            StackValue::Block(_) => "block",
        }
    }
}

/// A user-defined function: its parameter names and compiled body
#[derive(Debug, Clone)]
pub struct Closure<'a> {
    pub params: Vec<String>,
    pub body: &'a [Instruction],
}
