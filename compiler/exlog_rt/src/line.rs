//! The console line for one logged expression.
//!
//! ```text
//! [main.rs:12 (main)] items.len() = 3 (UIntPtr)
//! [main.rs:13 (main)] maybe = null
//! ```

use exlog_ir::ty::write_type;

use crate::value_fmt::write_value;
use crate::Value;

/// Last path component of a source file path.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Format `[<file>:<line> (<member>)] <expr> = <value> (<type>)`.
///
/// A null value prints as `null` with no type suffix.
pub fn format_line(file: &str, line: u32, member: &str, expression: &str, value: &Value) -> String {
    let mut buf = String::with_capacity(expression.len() + 48);
    buf.push('[');
    buf.push_str(file_name(file));
    buf.push(':');
    buf.push_str(&line.to_string());
    buf.push_str(" (");
    buf.push_str(member);
    buf.push_str(")] ");
    buf.push_str(expression);
    buf.push_str(" = ");

    write_value(value, &mut buf);
    if let Some(ty) = value.runtime_type() {
        buf.push_str(" (");
        write_type(&ty, &mut buf);
        buf.push(')');
    }
    buf
}
