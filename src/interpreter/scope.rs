use std::collections::HashMap;

use super::value::Closure;

/// Variable bindings of a single call frame
pub type Locals = HashMap<String, f64>;

/// The state owned by one invocation of a block.
///
/// Both tables start out empty for every call: a function sees only its own
/// parameters and whatever it assigns or defines itself.
#[derive(Debug, Default)]
pub struct Frame<'a> {
    locals: Locals,
    funcs: HashMap<String, Closure<'a>>,
}

impl<'a> Frame<'a> {
    pub fn new(locals: Locals) -> Self {
        Self {
            locals,
            funcs: HashMap::new(),
        }
    }

    pub fn local(&self, name: &str) -> Option<f64> {
        self.locals.get(name).copied()
    }

    pub fn set_local(&mut self, name: impl ToString, value: f64) {
        self.locals.insert(name.to_string(), value);
    }

    pub fn function(&self, name: &str) -> Option<&Closure<'a>> {
        self.funcs.get(name)
    }

    pub fn define(&mut self, name: impl ToString, closure: Closure<'a>) {
        self.funcs.insert(name.to_string(), closure);
    }
}
