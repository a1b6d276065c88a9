//! Runtime value shapes.
//!
//! A [`Value`] is what the printer sees of a logged expression: just enough
//! structure to pick a rendering rule, plus the runtime type.

use exlog_ir::TypeDescriptor;

/// Closed shape of an inspected value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    /// Absent value.
    Null,
    Char(char),
    Str(String),
    /// Key/value pair.
    Pair {
        key: Box<Value>,
        value: Box<Value>,
        ty: TypeDescriptor,
    },
    /// Keyed container, in iteration order.
    Map {
        entries: Vec<(Value, Value)>,
        ty: TypeDescriptor,
    },
    /// Sequence, in iteration order.
    Seq {
        items: Vec<Value>,
        ty: TypeDescriptor,
    },
    /// A type descriptor held as a value.
    Type(TypeDescriptor),
    /// Anything else: its runtime type and its own string form.
    Object { ty: TypeDescriptor, text: String },
}

impl Value {
    pub fn object(ty: TypeDescriptor, text: impl Into<String>) -> Self {
        Value::Object {
            ty,
            text: text.into(),
        }
    }

    /// Runtime type of the value; `None` for [`Value::Null`].
    pub fn runtime_type(&self) -> Option<TypeDescriptor> {
        match self {
            Value::Null => None,
            Value::Char(_) => Some(TypeDescriptor::primitive("Char")),
            Value::Str(_) => Some(TypeDescriptor::primitive("String")),
            Value::Type(_) => Some(TypeDescriptor::named("Type", Vec::new())),
            Value::Pair { ty, .. }
            | Value::Map { ty, .. }
            | Value::Seq { ty, .. }
            | Value::Object { ty, .. } => Some(ty.clone()),
        }
    }
}
