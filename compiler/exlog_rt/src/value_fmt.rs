//! Value pretty-printing.
//!
//! Rules, first match wins:
//!
//! 1. null → `null`
//! 2. char → `'c'`
//! 3. string → `"s"`, unescaped
//! 4. pair → `key: value`
//! 5. keyed container → `{ k: v, k: v }`, empty `{ }`
//! 6. sequence → `{ a, b }`, empty `{ }`
//! 7. type → the type printer
//! 8. anything else → its own text, unless that text is just its type's
//!    name, in which case the type printer's rendering of the runtime type
//!
//! Nested values are printed with the same rules.

use exlog_ir::stack::ensure_sufficient_stack;
use exlog_ir::{render_type, ty::write_type, TypeDescriptor};

use crate::Value;

/// Render a value as a display string.
pub fn render_value(value: &Value) -> String {
    let mut buf = String::new();
    write_value(value, &mut buf);
    buf
}

/// Render a value into an existing buffer.
pub fn write_value(value: &Value, buf: &mut String) {
    ensure_sufficient_stack(|| match value {
        Value::Null => buf.push_str("null"),
        Value::Char(c) => {
            buf.push('\'');
            buf.push(*c);
            buf.push('\'');
        }
        Value::Str(s) => {
            buf.push('"');
            buf.push_str(s);
            buf.push('"');
        }
        Value::Pair { key, value, .. } => write_entry(key, value, buf),
        Value::Map { entries, .. } => {
            write_braced(entries.iter(), buf, |(k, v), buf| write_entry(k, v, buf));
        }
        Value::Seq { items, .. } => {
            write_braced(items.iter(), buf, write_value);
        }
        Value::Type(ty) => write_type(ty, buf),
        Value::Object { ty, text } => {
            if names_its_type(text, ty) {
                write_type(ty, buf);
            } else {
                buf.push_str(text);
            }
        }
    });
}

fn write_entry(key: &Value, value: &Value, buf: &mut String) {
    write_value(key, buf);
    buf.push_str(": ");
    write_value(value, buf);
}

/// `{ a, b }`, or `{ }` when there is nothing inside.
fn write_braced<I: Iterator>(
    items: I,
    buf: &mut String,
    mut write_item: impl FnMut(I::Item, &mut String),
) {
    buf.push('{');
    for (i, item) in items.enumerate() {
        buf.push_str(if i == 0 { " " } else { ", " });
        write_item(item, buf);
    }
    buf.push_str(" }");
}

/// Whether an object's text says nothing beyond the name of its type.
fn names_its_type(text: &str, ty: &TypeDescriptor) -> bool {
    text == ty.bare_name() || text == render_type(ty)
}

#[cfg(test)]
mod tests;
