//! Source positions.
//!
//! The front-end reports positions as 1-based line/column pairs rather than
//! byte offsets: dispatch is keyed by line, and diagnostics only ever need
//! to point a human at a place in a file.

use std::fmt;

/// A 1-based line/column pair.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl LineCol {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        LineCol { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A source range, start inclusive, end exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSpan {
    pub start: LineCol,
    pub end: LineCol,
}

impl LineSpan {
    #[inline]
    pub const fn new(start: LineCol, end: LineCol) -> Self {
        LineSpan { start, end }
    }

    /// Span covering a single line from `start_col` to `end_col`.
    #[inline]
    pub const fn on_line(line: u32, start_col: u32, end_col: u32) -> Self {
        LineSpan {
            start: LineCol::new(line, start_col),
            end: LineCol::new(line, end_col),
        }
    }
}

impl fmt::Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A span inside a named file.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub file: String,
    pub span: LineSpan,
}

impl Location {
    pub fn new(file: impl Into<String>, span: LineSpan) -> Self {
        Location {
            file: file.into(),
            span,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.span.start)
    }
}

#[cfg(test)]
mod tests;
