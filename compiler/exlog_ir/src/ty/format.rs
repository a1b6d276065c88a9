//! Type pretty-printing.
//!
//! Renders a [`TypeDescriptor`] the way a reader would write it in source:
//! `Int32?[]`, `Dictionary<String, List<Int32>>`, `Outer<A>.Inner<B>`.

use crate::stack::ensure_sufficient_stack;

use super::{NamedType, TypeDescriptor};

/// Render a type descriptor as a display string.
pub fn render_type(ty: &TypeDescriptor) -> String {
    let mut buf = String::new();
    write_type(ty, &mut buf);
    buf
}

/// Render a type descriptor into an existing buffer.
pub fn write_type(ty: &TypeDescriptor, buf: &mut String) {
    ensure_sufficient_stack(|| match ty {
        TypeDescriptor::Array(element) => {
            write_type(element, buf);
            buf.push_str("[]");
        }
        TypeDescriptor::Pointer(element) => {
            write_type(element, buf);
            buf.push('*');
        }
        TypeDescriptor::ByRef(element) => {
            write_type(element, buf);
            buf.push('&');
        }
        TypeDescriptor::Nullable(underlying) => {
            write_type(underlying, buf);
            buf.push('?');
        }
        TypeDescriptor::Primitive(name) | TypeDescriptor::TypeParameter(name) => {
            buf.push_str(name);
        }
        TypeDescriptor::Named(named) => write_named(named, buf),
    });
}

/// Render every level of a possibly nested generic type, outermost first.
///
/// Each level takes its own arity (total minus what enclosing levels took)
/// off the front of the remaining arguments. The type itself is the last
/// level and its total arity is the whole argument list.
fn write_named(named: &NamedType, buf: &mut String) {
    let levels = named
        .declaring
        .iter()
        .map(|level| (level.name.as_str(), level.arity))
        .chain(std::iter::once((named.name.as_str(), named.args.len())));

    let mut taken = 0;
    for (depth, (name, total_arity)) in levels.enumerate() {
        if depth > 0 {
            buf.push('.');
        }

        let remaining = named.args.len() - taken;
        let own_arity = total_arity.saturating_sub(taken).min(remaining);
        let own_args = &named.args[taken..taken + own_arity];
        taken += own_arity;

        buf.push_str(strip_arity_suffix(name));
        if own_args.is_empty() {
            continue;
        }

        buf.push('<');
        for (i, arg) in own_args.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            write_type(arg, buf);
        }
        buf.push('>');
    }
}

/// Drop a metadata arity suffix: `` List`1 `` becomes `List`.
fn strip_arity_suffix(name: &str) -> &str {
    match name.rsplit_once('`') {
        Some((base, digits))
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) =>
        {
            base
        }
        _ => name,
    }
}
