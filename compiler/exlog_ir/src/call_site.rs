//! Normalized marker call sites.

use std::fmt;

use crate::{Location, TypeDescriptor};

/// Dispatch key: the file and 1-based line a marker call reports at run time.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub file: String,
    pub line: u32,
}

impl Position {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Position {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Syntactic form a marker call was written in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// `log(x)`: the logged expression is the first argument.
    DirectArgument,
    /// `x.log()`: the logged expression is the receiver.
    FluentReceiver,
    /// `x?.log()`: the logged expression is the one guarded by the null check.
    ConditionalChain,
    /// Anything else. The expression text is a placeholder notice.
    Unsupported,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::DirectArgument => "direct argument",
            Shape::FluentReceiver => "fluent receiver",
            Shape::ConditionalChain => "conditional chain",
            Shape::Unsupported => "unsupported",
        }
    }
}

/// One discovered marker invocation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallSite {
    pub position: Position,
    /// Verbatim source text of the logged expression.
    pub expression: String,
    /// Static type bound to the marker's type parameter.
    pub ty: TypeDescriptor,
    pub shape: Shape,
    /// Enclosing member (function, method, closure owner) name.
    pub member: String,
    /// Marker token location, used when reporting diagnostics.
    pub location: Location,
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.position, self.expression)
    }
}
