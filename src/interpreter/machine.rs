use crate::compiler::{Instruction, Op};
use crate::stdlib::Builtin;

use super::error::RuntimeError;
use super::scope::{Frame, Locals};
use super::value::{Closure, StackValue};

/// The stack machine.
///
/// A `Machine` holds only configuration; all run state lives in the frames
/// created by [`Machine::run`], so one machine can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Machine {
    max_call_depth: Option<usize>,
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit how deeply user-defined functions may call each other.
    /// `None` means unbounded.
    pub fn with_max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }

    /// Run `instructions` in a fresh frame seeded with `locals`. The result
    /// is the number on top of the stack afterwards, or NaN if the stack is
    /// empty.
    pub fn run(&self, instructions: &[Instruction], locals: Locals) -> Result<f64, RuntimeError> {
        self.run_frame(instructions, Frame::new(locals), 0)
    }

    fn run_frame<'a>(
        &self,
        instructions: &'a [Instruction],
        mut frame: Frame<'a>,
        depth: usize,
    ) -> Result<f64, RuntimeError> {
        let mut stack = Stack::default();

        for instruction in instructions {
            match instruction {
                Instruction::Number(value) => stack.push(StackValue::Number(*value)),
                Instruction::Name(name) => stack.push(StackValue::Name(name.clone())),
                Instruction::Block(block) => stack.push(StackValue::Block(block)),
                Instruction::Op(op) => self.step(*op, &mut stack, &mut frame, depth)?,
            }
        }

        stack.result()
    }

    fn step<'a>(
        &self,
        op: Op,
        stack: &mut Stack<'a>,
        frame: &mut Frame<'a>,
        depth: usize,
    ) -> Result<(), RuntimeError> {
        if let Some(binary) = op.as_binary() {
            let left = stack.pop_number(op)?;
            let right = stack.pop_number(op)?;
            let value = Builtin::for_operator(binary).call(&[left, right])?;
            stack.push(StackValue::Number(value));
            return Ok(());
        }

        match op {
            Op::Negate => {
                let value = stack.pop_number(op)?;
                stack.push(StackValue::Number(-value));
            }
            Op::GetLocal => {
                let name = stack.pop_name(op)?;
                let value = frame
                    .local(&name)
                    .ok_or(RuntimeError::UnknownVariable(name))?;
                stack.push(StackValue::Number(value));
            }
            Op::SetLocal => {
                let name = stack.pop_name(op)?;
                let value = stack.pop_number(op)?;
                frame.set_local(name, value);
                stack.push(StackValue::Number(value));
            }
            Op::Call => {
                let name = stack.pop_name(op)?;
                let count = stack.pop_count(op)?;
                let args = (0..count)
                    .map(|_| stack.pop_number(op))
                    .collect::<Result<Vec<_>, _>>()?;
                let value = self.call(&name, &args, frame, depth)?;
                stack.push(StackValue::Number(value));
            }
            Op::Define => {
                let name = stack.pop_name(op)?;
                let count = stack.pop_count(op)?;
                let params = (0..count)
                    .map(|_| stack.pop_name(op))
                    .collect::<Result<Vec<_>, _>>()?;
                let body = stack.pop_block(op)?;
                tracing::trace!(name = %name, params = params.len(), "define");
                frame.define(name, Closure { params, body });
            }
            _ => {
                return Err(RuntimeError::MalformedProgram(format!(
                    "unhandled operation '{}'",
                    op.tag()
                )));
            }
        }

        Ok(())
    }

    fn call(
        &self,
        name: &str,
        args: &[f64],
        frame: &Frame<'_>,
        depth: usize,
    ) -> Result<f64, RuntimeError> {
        if let Some(builtin) = Builtin::lookup(name) {
            return builtin.call(args);
        }

        let closure = frame
            .function(name)
            .ok_or_else(|| RuntimeError::UnknownFunction(name.to_string()))?;

        if closure.params.len() != args.len() {
            return Err(RuntimeError::Arity {
                name: name.to_string(),
                expected: closure.params.len(),
                found: args.len(),
            });
        }

        if let Some(limit) = self.max_call_depth
            && depth >= limit
        {
            return Err(RuntimeError::CallDepthExceeded(limit));
        }

        tracing::trace!(name, depth = depth + 1, "call");
        let locals = closure
            .params
            .iter()
            .cloned()
            .zip(args.iter().copied())
            .collect();

        self.run_frame(closure.body, Frame::new(locals), depth + 1)
    }
}

#[derive(Debug, Default)]
struct Stack<'a> {
    values: Vec<StackValue<'a>>,
}

impl<'a> Stack<'a> {
    fn push(&mut self, value: StackValue<'a>) {
        self.values.push(value);
    }

    fn pop(&mut self, op: Op) -> Result<StackValue<'a>, RuntimeError> {
        self.values.pop().ok_or_else(|| {
            RuntimeError::MalformedProgram(format!("stack underflow in '{}'", op.tag()))
        })
    }

    fn pop_number(&mut self, op: Op) -> Result<f64, RuntimeError> {
        match self.pop(op)? {
            StackValue::Number(value) => Ok(value),
            other => Err(mismatch(op, "number", &other)),
        }
    }

    fn pop_name(&mut self, op: Op) -> Result<String, RuntimeError> {
        match self.pop(op)? {
            StackValue::Name(name) => Ok(name),
            other => Err(mismatch(op, "name", &other)),
        }
    }

    fn pop_block(&mut self, op: Op) -> Result<&'a [Instruction], RuntimeError> {
        match self.pop(op)? {
            StackValue::Block(block) => Ok(block),
            other => Err(mismatch(op, "block", &other)),
        }
    }

    /// An argument or parameter count: a non-negative whole number.
    fn pop_count(&mut self, op: Op) -> Result<usize, RuntimeError> {
        let count = self.pop_number(op)?;
        if count < 0.0 || count.fract() != 0.0 || !count.is_finite() {
            return Err(RuntimeError::MalformedProgram(format!(
                "invalid count {count} in '{}'",
                op.tag()
            )));
        }
        Ok(count as usize)
    }

    fn result(mut self) -> Result<f64, RuntimeError> {
        match self.values.pop() {
            None => Ok(f64::NAN),
            Some(StackValue::Number(value)) => Ok(value),
            Some(other) => Err(RuntimeError::MalformedProgram(format!(
                "program left a {} on top of the stack",
                other.kind()
            ))),
        }
    }
}

fn mismatch(op: Op, expected: &str, found: &StackValue<'_>) -> RuntimeError {
    RuntimeError::MalformedProgram(format!(
        "'{}' expected a {expected}, found a {}",
        op.tag(),
        found.kind()
    ))
}
