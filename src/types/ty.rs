use std::fmt;

/// What the checker knows about the value flowing through a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Not known yet; takes on whatever flows through it.
    Open,
    Number,
    /// The "value" of a statement that produces none, such as a definition.
    Undefined,
    Function,
}

impl Kind {
    pub fn is_open(self) -> bool {
        self == Kind::Open
    }

    pub fn pretty(self) -> &'static str {
        match self {
            Kind::Open => "Open",
            Kind::Number => "Number",
            Kind::Undefined => "Undefined",
            Kind::Function => "Function",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.pretty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_print() {
        assert_eq!(Kind::Number.pretty(), "Number");
        assert_eq!(Kind::Undefined.to_string(), "Undefined");
    }

    #[test]
    fn test_only_open_is_open() {
        assert!(Kind::Open.is_open());
        assert!(!Kind::Number.is_open());
        assert!(!Kind::Function.is_open());
    }
}
