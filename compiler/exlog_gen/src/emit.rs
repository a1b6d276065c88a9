//! Source emission.
//!
//! Lowers a [`DispatchTable`] into the generated Rust unit: the marker
//! function, whose body is a `match` on the caller's `(file, line)`, and the
//! fluent extension trait built on top of it.
//!
//! Guarded entries compare the call's static type against each branch's
//! descriptor in order. Both the no-match `else` and the unknown-position
//! `_` arm call into the runtime's reporters instead of doing nothing.

mod instr;
mod writer;

use exlog_ir::stack::ensure_sufficient_stack;
use exlog_ir::{Branch, DispatchEntry, DispatchTable, TypeDescriptor};

pub use instr::Instr;
pub use writer::{render, write_instrs, Emitter, StringEmitter};

use crate::GenConfig;

/// Header comment of every emitted unit.
pub const GENERATED_HEADER: &str = "@generated by exlog_gen. Do not edit.";

/// Lower and render a table in one step.
pub fn emit_source(table: &DispatchTable, config: &GenConfig) -> String {
    render(&lower(table, config))
}

/// Lower a dispatch table into emission instructions.
pub fn lower(table: &DispatchTable, config: &GenConfig) -> Vec<Instr> {
    let rt = config.runtime_crate.as_str();
    let marker = config.marker_name.as_str();
    let fluent = config.fluent_trait.as_str();

    let mut out = vec![
        Instr::Comment(GENERATED_HEADER.to_string()),
        Instr::Blank,
        Instr::line("#[track_caller]"),
        Instr::open(format!(
            "pub fn {marker}<T: {rt}::Inspect>(expression: T) -> T"
        )),
        Instr::line("let caller = ::std::panic::Location::caller();"),
        Instr::open("match (caller.file(), caller.line())"),
    ];

    for entry in table.entries() {
        // A later entry at an already indexed position is unreachable at run time.
        let indexed = table
            .get(&entry.position.file, entry.position.line)
            .is_some_and(|first| std::ptr::eq(first, entry));
        if indexed {
            lower_entry(entry, rt, &mut out);
        } else {
            tracing::debug!(position = %entry.position, "skipping shadowed dispatch entry");
        }
    }

    out.extend([
        Instr::line(format!("_ => {rt}::report_missing(caller),")),
        Instr::Close(""),
        Instr::line("expression"),
        Instr::Close(""),
        Instr::Blank,
        Instr::open(format!("pub trait {fluent}: {rt}::Inspect + Sized")),
        Instr::line("#[track_caller]"),
        Instr::open(format!("fn {marker}(self) -> Self")),
        Instr::line(format!("{marker}(self)")),
        Instr::Close(""),
        Instr::Close(""),
        Instr::Blank,
        Instr::line(format!("impl<T: {rt}::Inspect> {fluent} for T {{}}")),
    ]);
    out
}

fn lower_entry(entry: &DispatchEntry, rt: &str, out: &mut Vec<Instr>) {
    out.push(Instr::open(format!(
        "({:?}, {}) =>",
        entry.position.file, entry.position.line
    )));

    if entry.is_unconditional() {
        out.extend(
            entry
                .branches
                .first()
                .map(|branch| log_call(branch, &entry.member, rt)),
        );
    } else {
        out.push(Instr::line("let ty = T::type_descriptor();"));
        for (i, branch) in entry.branches.iter().enumerate() {
            let guard = format!("if ty == {}", descriptor_expr(&branch.ty, rt));
            if i == 0 {
                out.push(Instr::Open(guard));
            } else {
                out.push(Instr::Reopen(format!("else {guard}")));
            }
            out.push(log_call(branch, &entry.member, rt));
        }
        out.push(Instr::Reopen("else".to_string()));
        out.push(Instr::line(format!("{rt}::report_unmatched(&ty, caller);")));
        out.push(Instr::Close(""));
    }

    out.push(Instr::Close(""));
}

fn log_call(branch: &Branch, member: &str, rt: &str) -> Instr {
    Instr::line(format!(
        "{rt}::log_to_console(&expression, {:?}, {member:?}, caller);",
        branch.expression
    ))
}

/// Rust expression that rebuilds `ty` through the runtime's constructors.
pub fn descriptor_expr(ty: &TypeDescriptor, rt: &str) -> String {
    ensure_sufficient_stack(|| match ty {
        TypeDescriptor::Primitive(name) => {
            format!("{rt}::TypeDescriptor::primitive({name:?})")
        }
        TypeDescriptor::TypeParameter(name) => {
            format!("{rt}::TypeDescriptor::type_parameter({name:?})")
        }
        TypeDescriptor::Array(element) => {
            format!("{rt}::TypeDescriptor::array({})", descriptor_expr(element, rt))
        }
        TypeDescriptor::Pointer(element) => {
            format!("{rt}::TypeDescriptor::pointer({})", descriptor_expr(element, rt))
        }
        TypeDescriptor::ByRef(element) => {
            format!("{rt}::TypeDescriptor::by_ref({})", descriptor_expr(element, rt))
        }
        TypeDescriptor::Nullable(underlying) => format!(
            "{rt}::TypeDescriptor::nullable({})",
            descriptor_expr(underlying, rt)
        ),
        TypeDescriptor::Named(named) if named.declaring.is_empty() => format!(
            "{rt}::TypeDescriptor::named({:?}, {})",
            named.name,
            args_expr(&named.args, rt)
        ),
        TypeDescriptor::Named(named) => {
            let declaring = named
                .declaring
                .iter()
                .map(|level| format!("{rt}::DeclaringType::new({:?}, {})", level.name, level.arity))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{rt}::TypeDescriptor::Named(::std::boxed::Box::new({rt}::NamedType {{ \
                 name: ::std::string::String::from({:?}), declaring: vec![{declaring}], args: {} }}))",
                named.name,
                args_expr(&named.args, rt)
            )
        }
    })
}

fn args_expr(args: &[TypeDescriptor], rt: &str) -> String {
    if args.is_empty() {
        return "::std::vec::Vec::new()".to_string();
    }
    let args = args
        .iter()
        .map(|arg| descriptor_expr(arg, rt))
        .collect::<Vec<_>>()
        .join(", ");
    format!("vec![{args}]")
}

#[cfg(test)]
mod tests;
