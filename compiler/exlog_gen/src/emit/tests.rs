use exlog_ir::{Branch, DeclaringType, DispatchEntry, Position};
use pretty_assertions::assert_eq;
use smallvec::smallvec;

use super::*;

fn entry(line: u32, branches: &[(TypeDescriptor, &str)]) -> DispatchEntry {
    DispatchEntry {
        position: Position::new("src/main.rs", line),
        member: "main".to_string(),
        branches: branches
            .iter()
            .map(|(ty, expr)| Branch::new(ty.clone(), *expr))
            .collect(),
    }
}

fn int32() -> TypeDescriptor {
    TypeDescriptor::primitive("Int32")
}

fn string() -> TypeDescriptor {
    TypeDescriptor::primitive("String")
}

#[test]
fn test_emitted_unit() {
    let table: DispatchTable = vec![
        entry(3, &[(int32(), "1")]),
        entry(5, &[(int32(), "x"), (string(), "s")]),
    ]
    .into_iter()
    .collect();

    let expected = r##"// @generated by exlog_gen. Do not edit.

#[track_caller]
pub fn log<T: ::exlog_rt::Inspect>(expression: T) -> T {
    let caller = ::std::panic::Location::caller();
    match (caller.file(), caller.line()) {
        ("src/main.rs", 3) => {
            ::exlog_rt::log_to_console(&expression, "1", "main", caller);
        }
        ("src/main.rs", 5) => {
            let ty = T::type_descriptor();
            if ty == ::exlog_rt::TypeDescriptor::primitive("Int32") {
                ::exlog_rt::log_to_console(&expression, "x", "main", caller);
            } else if ty == ::exlog_rt::TypeDescriptor::primitive("String") {
                ::exlog_rt::log_to_console(&expression, "s", "main", caller);
            } else {
                ::exlog_rt::report_unmatched(&ty, caller);
            }
        }
        _ => ::exlog_rt::report_missing(caller),
    }
    expression
}

pub trait Log: ::exlog_rt::Inspect + Sized {
    #[track_caller]
    fn log(self) -> Self {
        log(self)
    }
}

impl<T: ::exlog_rt::Inspect> Log for T {}
"##;

    assert_eq!(emit_source(&table, &GenConfig::default()), expected);
}

#[test]
fn test_empty_table_still_reports_missing() {
    let source = emit_source(&DispatchTable::new(), &GenConfig::default());
    assert!(source.contains("        _ => ::exlog_rt::report_missing(caller),\n"));
    assert!(source.contains("pub trait Log"));
}

#[test]
fn test_expression_text_is_escaped() {
    let table: DispatchTable = std::iter::once(entry(2, &[(string(), "format!(\"{}\",\n  x)")])).collect();
    let source = emit_source(&table, &GenConfig::default());
    assert!(source.contains(r#"log_to_console(&expression, "format!(\"{}\",\n  x)", "main", caller);"#));
}

#[test]
fn test_shadowed_entry_is_not_emitted() {
    let table: DispatchTable = vec![
        entry(4, &[(int32(), "first")]),
        entry(9, &[(int32(), "other")]),
        entry(4, &[(int32(), "again")]),
    ]
    .into_iter()
    .collect();

    let source = emit_source(&table, &GenConfig::default());
    assert!(source.contains("\"first\""));
    assert!(!source.contains("\"again\""));
    assert_eq!(source.matches("(\"src/main.rs\", 4) =>").count(), 1);
}

#[test]
fn test_config_renames_marker_and_runtime() {
    let config = GenConfig::default()
        .with_marker_name("trace")
        .with_runtime_crate("crate::rt");
    let source = emit_source(&DispatchTable::new(), &config);
    assert!(source.contains("pub fn trace<T: crate::rt::Inspect>(expression: T) -> T {"));
    assert!(source.contains("    fn trace(self) -> Self {\n        trace(self)\n"));
}

#[test]
fn test_descriptor_expr_wrappers() {
    let ty = TypeDescriptor::array(TypeDescriptor::nullable(int32()));
    assert_eq!(
        descriptor_expr(&ty, "rt"),
        "rt::TypeDescriptor::array(rt::TypeDescriptor::nullable(rt::TypeDescriptor::primitive(\"Int32\")))"
    );
}

#[test]
fn test_descriptor_expr_generic() {
    let ty = TypeDescriptor::named("Dictionary", vec![string(), int32()]);
    assert_eq!(
        descriptor_expr(&ty, "rt"),
        "rt::TypeDescriptor::named(\"Dictionary\", vec![rt::TypeDescriptor::primitive(\"String\"), \
         rt::TypeDescriptor::primitive(\"Int32\")])"
    );
    assert_eq!(
        descriptor_expr(&TypeDescriptor::named("Unit", Vec::new()), "rt"),
        "rt::TypeDescriptor::named(\"Unit\", ::std::vec::Vec::new())"
    );
}

#[test]
fn test_descriptor_expr_nested() {
    let ty = TypeDescriptor::nested(vec![DeclaringType::new("Outer", 1)], "Inner", vec![int32()])
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        descriptor_expr(&ty, "rt"),
        "rt::TypeDescriptor::Named(::std::boxed::Box::new(rt::NamedType { \
         name: ::std::string::String::from(\"Inner\"), \
         declaring: vec![rt::DeclaringType::new(\"Outer\", 1)], \
         args: vec![rt::TypeDescriptor::primitive(\"Int32\")] }))"
    );
}

#[test]
fn test_lower_guarded_entry_instructions() {
    let table: DispatchTable = std::iter::once(DispatchEntry {
        position: Position::new("a.rs", 1),
        member: "m".to_string(),
        branches: smallvec![Branch::new(int32(), "x"), Branch::new(string(), "y")],
    })
    .collect();

    let instrs = lower(&table, &GenConfig::default());
    let reopen_count = instrs
        .iter()
        .filter(|i| matches!(i, Instr::Reopen(_)))
        .count();
    // One `else if` for the second branch, one final `else`.
    assert_eq!(reopen_count, 2);
    assert!(instrs.contains(&Instr::line("::exlog_rt::report_unmatched(&ty, caller);")));
}
