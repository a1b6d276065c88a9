//! Converting Rust values into printable [`Value`]s.
//!
//! [`Inspect`] gives every loggable type two things: the static
//! [`TypeDescriptor`] the generated dispatch guards on, and a runtime
//! [`Value`] for the printer.
//!
//! Scalars map to their conventional display names (`i32` is `Int32`,
//! `f64` is `Double`). Containers map to their generic shapes:
//!
//! | Rust | Descriptor |
//! |---|---|
//! | `Vec<T>`, `VecDeque<T>` | `List<T>` |
//! | `[T; N]`, `[T]` | `T[]` |
//! | `HashMap<K, V>`, `BTreeMap<K, V>` | `Dictionary<K, V>` |
//! | `HashSet<T>` | `HashSet<T>` |
//! | `BTreeSet<T>` | `SortedSet<T>` |
//! | `(K, V)` | `KeyValuePair<K, V>` |
//! | `Option<T>` | `T?` |
//! | `&T`, `&mut T` | `T&` |
//! | `*const T`, `*mut T` | `T*` |
//!
//! `Box<T>` is transparent. A type of your own implements the trait with a
//! [`TypeDescriptor::named`] descriptor and, usually, a [`Value::Object`]
//! holding its `Display` text:
//!
//! ```
//! use exlog_rt::{Inspect, TypeDescriptor, Value};
//!
//! struct Meters(f64);
//!
//! impl Inspect for Meters {
//!     fn type_descriptor() -> TypeDescriptor {
//!         TypeDescriptor::named("Meters", Vec::new())
//!     }
//!
//!     fn to_value(&self) -> Value {
//!         Value::object(Self::type_descriptor(), format!("{} m", self.0))
//!     }
//! }
//!
//! assert_eq!(exlog_rt::render_value(&Meters(2.5).to_value()), "2.5 m");
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use exlog_ir::TypeDescriptor;

use crate::Value;

/// A type the logger can describe and print.
pub trait Inspect {
    /// Static type, as the generated dispatch compares it.
    fn type_descriptor() -> TypeDescriptor;

    /// Runtime shape of this value.
    fn to_value(&self) -> Value;
}

macro_rules! inspect_scalar {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::primitive($name)
                }

                fn to_value(&self) -> Value {
                    Value::object(Self::type_descriptor(), self.to_string())
                }
            }
        )*
    };
}

inspect_scalar! {
    i8 => "SByte",
    i16 => "Int16",
    i32 => "Int32",
    i64 => "Int64",
    i128 => "Int128",
    isize => "IntPtr",
    u8 => "Byte",
    u16 => "UInt16",
    u32 => "UInt32",
    u64 => "UInt64",
    u128 => "UInt128",
    usize => "UIntPtr",
    f32 => "Single",
    f64 => "Double",
    bool => "Boolean",
}

impl Inspect for char {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive("Char")
    }

    fn to_value(&self) -> Value {
        Value::Char(*self)
    }
}

impl Inspect for str {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive("String")
    }

    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl Inspect for String {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive("String")
    }

    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl Inspect for TypeDescriptor {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::named("Type", Vec::new())
    }

    fn to_value(&self) -> Value {
        Value::Type(self.clone())
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::nullable(T::type_descriptor())
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::by_ref(T::type_descriptor())
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::by_ref(T::type_descriptor())
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn type_descriptor() -> TypeDescriptor {
        T::type_descriptor()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: Inspect + ?Sized> Inspect for *const T {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::pointer(T::type_descriptor())
    }

    fn to_value(&self) -> Value {
        Value::object(Self::type_descriptor(), format!("{:p}", *self))
    }
}

impl<T: Inspect + ?Sized> Inspect for *mut T {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::pointer(T::type_descriptor())
    }

    fn to_value(&self) -> Value {
        Value::object(Self::type_descriptor(), format!("{:p}", *self))
    }
}

impl<K: Inspect, V: Inspect> Inspect for (K, V) {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::named(
            "KeyValuePair",
            vec![K::type_descriptor(), V::type_descriptor()],
        )
    }

    fn to_value(&self) -> Value {
        Value::Pair {
            key: Box::new(self.0.to_value()),
            value: Box::new(self.1.to_value()),
            ty: Self::type_descriptor(),
        }
    }
}

fn seq<'a, T: Inspect + 'a>(items: impl IntoIterator<Item = &'a T>, ty: TypeDescriptor) -> Value {
    Value::Seq {
        items: items.into_iter().map(Inspect::to_value).collect(),
        ty,
    }
}

fn map<'a, K: Inspect + 'a, V: Inspect + 'a>(
    entries: impl IntoIterator<Item = (&'a K, &'a V)>,
    ty: TypeDescriptor,
) -> Value {
    Value::Map {
        entries: entries
            .into_iter()
            .map(|(k, v)| (k.to_value(), v.to_value()))
            .collect(),
        ty,
    }
}

impl<T: Inspect> Inspect for [T] {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::array(T::type_descriptor())
    }

    fn to_value(&self) -> Value {
        seq(self, Self::type_descriptor())
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::array(T::type_descriptor())
    }

    fn to_value(&self) -> Value {
        seq(self, Self::type_descriptor())
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::named("List", vec![T::type_descriptor()])
    }

    fn to_value(&self) -> Value {
        seq(self, Self::type_descriptor())
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::named("List", vec![T::type_descriptor()])
    }

    fn to_value(&self) -> Value {
        seq(self, Self::type_descriptor())
    }
}

impl<T: Inspect, S> Inspect for HashSet<T, S> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::named("HashSet", vec![T::type_descriptor()])
    }

    fn to_value(&self) -> Value {
        seq(self, Self::type_descriptor())
    }
}

impl<T: Inspect> Inspect for BTreeSet<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::named("SortedSet", vec![T::type_descriptor()])
    }

    fn to_value(&self) -> Value {
        seq(self, Self::type_descriptor())
    }
}

impl<K: Inspect, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::named(
            "Dictionary",
            vec![K::type_descriptor(), V::type_descriptor()],
        )
    }

    fn to_value(&self) -> Value {
        map(self, Self::type_descriptor())
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::named(
            "Dictionary",
            vec![K::type_descriptor(), V::type_descriptor()],
        )
    }

    fn to_value(&self) -> Value {
        map(self, Self::type_descriptor())
    }
}
