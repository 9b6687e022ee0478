//! Code formatting
//!
//! This module provides pretty-printing of the AST back into source text
//! through `Display` implementations.

mod surface;
