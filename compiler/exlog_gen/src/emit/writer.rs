//! Source writer.
//!
//! Renders an [`Instr`] list through an [`Emitter`]. The writer is the only
//! place that knows about indentation and braces.

use super::Instr;

/// Trait for emitting generated source text.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit indentation (4 spaces per level).
    fn emit_indent(&mut self, level: usize);
}

/// String-based emitter for in-memory output.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the emitted output.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Ensure the output ends with a single newline.
    pub fn ensure_trailing_newline(&mut self) {
        if !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, level: usize) {
        for _ in 0..level * 4 {
            self.buffer.push(' ');
        }
    }
}

/// Write every instruction in order.
pub fn write_instrs(instrs: &[Instr], out: &mut impl Emitter) {
    let mut depth = 0usize;
    for instr in instrs {
        match instr {
            Instr::Comment(text) => {
                out.emit_indent(depth);
                out.emit("// ");
                out.emit(text);
                out.emit_newline();
            }
            Instr::Line(text) => {
                out.emit_indent(depth);
                out.emit(text);
                out.emit_newline();
            }
            Instr::Blank => out.emit_newline(),
            Instr::Open(head) => {
                out.emit_indent(depth);
                out.emit(head);
                out.emit(" {");
                out.emit_newline();
                depth += 1;
            }
            Instr::Reopen(head) => {
                debug_assert!(depth > 0, "reopen at depth zero");
                out.emit_indent(depth.saturating_sub(1));
                out.emit("} ");
                out.emit(head);
                out.emit(" {");
                out.emit_newline();
            }
            Instr::Close(suffix) => {
                debug_assert!(depth > 0, "close at depth zero");
                depth = depth.saturating_sub(1);
                out.emit_indent(depth);
                out.emit("}");
                out.emit(suffix);
                out.emit_newline();
            }
        }
    }
}

/// Render an instruction list to a string ending in one newline.
pub fn render(instrs: &[Instr]) -> String {
    let mut out = StringEmitter::with_capacity(instrs.len() * 48);
    write_instrs(instrs, &mut out);
    out.ensure_trailing_newline();
    out.output()
}
