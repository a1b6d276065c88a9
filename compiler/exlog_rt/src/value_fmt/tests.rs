use std::collections::BTreeMap;

use exlog_ir::DeclaringType;
use pretty_assertions::assert_eq;

use super::*;
use crate::Inspect;

#[test]
fn test_null() {
    assert_eq!(render_value(&Value::Null), "null");
    assert_eq!(render_value(&None::<i32>.to_value()), "null");
}

#[test]
fn test_char_and_string() {
    assert_eq!(render_value(&'c'.to_value()), "'c'");
    assert_eq!(render_value(&"s".to_value()), "\"s\"");
    // Not escaped.
    assert_eq!(render_value(&"a\"b".to_string().to_value()), "\"a\"b\"");
}

#[test]
fn test_sequences() {
    assert_eq!(render_value(&vec![1_i32, 2, 3].to_value()), "{ 1, 2, 3 }");
    assert_eq!(render_value(&Vec::<i32>::new().to_value()), "{ }");
    assert_eq!(render_value(&[['a'], ['b']].to_value()), "{ { 'a' }, { 'b' } }");
}

#[test]
fn test_keyed_containers() {
    let map = BTreeMap::from([(1_i32, "1"), (2, "2")]);
    assert_eq!(render_value(&map.to_value()), "{ 1: \"1\", 2: \"2\" }");
    assert_eq!(render_value(&BTreeMap::<i32, i32>::new().to_value()), "{ }");
}

#[test]
fn test_pair() {
    assert_eq!(render_value(&("k", 1.5_f64).to_value()), "\"k\": 1.5");
}

#[test]
fn test_pair_wins_over_fallback() {
    let pair = Value::Pair {
        key: Box::new(Value::Char('x')),
        value: Box::new(Value::Null),
        ty: TypeDescriptor::named("KeyValuePair", Vec::new()),
    };
    assert_eq!(render_value(&pair), "'x': null");
}

#[test]
fn test_type_value() {
    let ty = TypeDescriptor::named("List", vec![TypeDescriptor::primitive("Int32")]);
    assert_eq!(render_value(&ty.to_value()), "List<Int32>");
}

#[test]
fn test_object_with_own_text() {
    assert_eq!(render_value(&42_i64.to_value()), "42");
    assert_eq!(render_value(&true.to_value()), "true");
}

#[test]
fn test_object_named_after_its_type_prints_the_type() {
    // An object whose text is only its dotted type name.
    let ty = TypeDescriptor::nested(
        vec![DeclaringType::new("Outer", 1)],
        "Inner",
        vec![TypeDescriptor::primitive("Int32"), TypeDescriptor::primitive("String")],
    )
    .unwrap_or_else(|e| panic!("{e}"));
    let object = Value::object(ty.clone(), "Outer.Inner");
    assert_eq!(render_value(&object), "Outer<Int32>.Inner<String>");

    let plain = Value::object(TypeDescriptor::named("Widget", Vec::new()), "Widget");
    assert_eq!(render_value(&plain), "Widget");

    let described = Value::object(ty, "inner #3");
    assert_eq!(render_value(&described), "inner #3");
}

#[test]
fn test_nested_option_inside_sequence() {
    assert_eq!(render_value(&vec![Some(1_i32), None].to_value()), "{ 1, null }");
}
