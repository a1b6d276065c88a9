//! Emission instructions.
//!
//! Lowering produces a flat list of these; the writer owns indentation and
//! braces, so lowering never concatenates code across lines.

/// One step of the emitted source unit.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Instr {
    /// `// text` at the current depth.
    Comment(String),
    /// A complete line at the current depth.
    Line(String),
    /// An empty line.
    Blank,
    /// `head {`, then one level deeper.
    Open(String),
    /// Back one level, `} head {`, then one level deeper again.
    Reopen(String),
    /// Back one level, then `}` followed by the suffix.
    Close(&'static str),
}

impl Instr {
    pub fn line(text: impl Into<String>) -> Self {
        Instr::Line(text.into())
    }

    pub fn open(head: impl Into<String>) -> Self {
        Instr::Open(head.into())
    }
}
