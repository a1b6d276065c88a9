//! Type descriptors.
//!
//! A [`TypeDescriptor`] is a closed, symbolic representation of a type. The
//! generator uses it to tell same-line call sites apart; the runtime uses it
//! to guard dispatch branches and to print the type of a logged value.
//!
//! # Nested generic types
//!
//! A type declared inside other types keeps the argument convention of its
//! host: the argument list of `Outer<A>.Inner<B>` is the *total* list `[A, B]`,
//! ordered outer to inner. Each enclosing level records its own total arity
//! in [`DeclaringType::arity`], so a printer can hand every level exactly its
//! own slice.

pub mod format;

use std::fmt;

pub use format::{render_type, write_type};

/// Closed model of a type shape.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeDescriptor {
    /// Built-in scalar such as `Int32` or `String`.
    Primitive(String),
    /// Nominal type, possibly generic, possibly nested in other types.
    Named(Box<NamedType>),
    /// Single-dimension array of the element type.
    Array(Box<TypeDescriptor>),
    /// Raw pointer to the element type.
    Pointer(Box<TypeDescriptor>),
    /// Reference to the element type.
    ByRef(Box<TypeDescriptor>),
    /// Value that may be absent.
    Nullable(Box<TypeDescriptor>),
    /// Type not known at synthesis time. Never resolved further.
    TypeParameter(String),
}

/// Nominal type payload of [`TypeDescriptor::Named`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedType {
    /// Simple name, without namespace or declaring types.
    pub name: String,
    /// Enclosing types, outermost first.
    pub declaring: Vec<DeclaringType>,
    /// Total generic argument list, outer levels first.
    pub args: Vec<TypeDescriptor>,
}

/// One enclosing level of a nested type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclaringType {
    pub name: String,
    /// Total generic arity of this level, inherited parameters included.
    pub arity: usize,
}

impl DeclaringType {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        DeclaringType {
            name: name.into(),
            arity,
        }
    }
}

/// Error when a declaring chain does not fit its argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArityError {
    /// A level declares fewer total parameters than the level enclosing it.
    Decreasing {
        level: String,
        arity: usize,
        enclosing: usize,
    },
    /// The chain needs more arguments than were supplied.
    TooFewArgs { needed: usize, supplied: usize },
}

impl fmt::Display for ArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArityError::Decreasing {
                level,
                arity,
                enclosing,
            } => write!(
                f,
                "`{level}` has total arity {arity}, less than its enclosing level's {enclosing}"
            ),
            ArityError::TooFewArgs { needed, supplied } => write!(
                f,
                "declaring chain needs {needed} generic arguments, {supplied} supplied"
            ),
        }
    }
}

impl std::error::Error for ArityError {}

impl TypeDescriptor {
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeDescriptor::Primitive(name.into())
    }

    pub fn type_parameter(name: impl Into<String>) -> Self {
        TypeDescriptor::TypeParameter(name.into())
    }

    /// Top-level nominal type with the given generic arguments.
    pub fn named(name: impl Into<String>, args: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Named(Box::new(NamedType {
            name: name.into(),
            declaring: Vec::new(),
            args,
        }))
    }

    /// Nominal type nested inside `declaring` (outermost first).
    ///
    /// `args` is the total argument list. Each declaring level's arity must
    /// be at least its parent's and at most `args.len()`.
    pub fn nested(
        declaring: Vec<DeclaringType>,
        name: impl Into<String>,
        args: Vec<TypeDescriptor>,
    ) -> Result<Self, ArityError> {
        let mut enclosing = 0;
        for level in &declaring {
            if level.arity < enclosing {
                return Err(ArityError::Decreasing {
                    level: level.name.clone(),
                    arity: level.arity,
                    enclosing,
                });
            }
            enclosing = level.arity;
        }
        if enclosing > args.len() {
            return Err(ArityError::TooFewArgs {
                needed: enclosing,
                supplied: args.len(),
            });
        }
        Ok(TypeDescriptor::Named(Box::new(NamedType {
            name: name.into(),
            declaring,
            args,
        })))
    }

    pub fn array(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(element))
    }

    pub fn pointer(element: TypeDescriptor) -> Self {
        TypeDescriptor::Pointer(Box::new(element))
    }

    pub fn by_ref(element: TypeDescriptor) -> Self {
        TypeDescriptor::ByRef(Box::new(element))
    }

    pub fn nullable(underlying: TypeDescriptor) -> Self {
        TypeDescriptor::Nullable(Box::new(underlying))
    }

    #[inline]
    pub fn is_type_parameter(&self) -> bool {
        matches!(self, TypeDescriptor::TypeParameter(_))
    }

    /// Whether a type parameter occurs anywhere in this descriptor.
    ///
    /// An open type can bind to any concrete type at the use site, so the
    /// generator can never prove it differs from another type.
    pub fn is_open(&self) -> bool {
        match self {
            TypeDescriptor::TypeParameter(_) => true,
            TypeDescriptor::Primitive(_) => false,
            TypeDescriptor::Named(named) => named.args.iter().any(TypeDescriptor::is_open),
            TypeDescriptor::Array(inner)
            | TypeDescriptor::Pointer(inner)
            | TypeDescriptor::ByRef(inner)
            | TypeDescriptor::Nullable(inner) => inner.is_open(),
        }
    }

    /// Dotted name path without generic arguments, e.g. `Outer.Inner`.
    ///
    /// This is what an object without its own string form prints as.
    pub fn bare_name(&self) -> String {
        match self {
            TypeDescriptor::Primitive(name) | TypeDescriptor::TypeParameter(name) => name.clone(),
            TypeDescriptor::Named(named) => {
                let mut path = String::new();
                for level in &named.declaring {
                    path.push_str(&level.name);
                    path.push('.');
                }
                path.push_str(&named.name);
                path
            }
            TypeDescriptor::Array(inner) => format!("{}[]", inner.bare_name()),
            TypeDescriptor::Pointer(inner) => format!("{}*", inner.bare_name()),
            TypeDescriptor::ByRef(inner) => format!("{}&", inner.bare_name()),
            TypeDescriptor::Nullable(inner) => format!("{}?", inner.bare_name()),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_type(self))
    }
}
