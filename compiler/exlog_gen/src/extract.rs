//! Call-site extraction.
//!
//! Turns one front-end [`InvocationRecord`] into a normalized [`CallSite`]:
//! the verbatim text of the logged expression, the line the call reports at
//! run time, and the static type bound to the marker's type parameter.
//!
//! Shapes are tried in a fixed order:
//!
//! 1. an explicit first argument (`log(x)`, `Logger::log(x)`, `this.log(x)`)
//! 2. a receiver with no arguments (`x.log()`)
//! 3. the not-null branch of a conditional access (`x?.log()`)
//!
//! Anything else still produces a call site, carrying
//! [`UNSUPPORTED_INVOCATION_NOTICE`] as its expression text.
//!
//! Every supported shape reports at the line of the marker name token, which
//! is where `#[track_caller]` places a method call. An unsupported call
//! reports at the first line of the whole invocation.

use exlog_ir::{CallSite, LineSpan, Location, Position, Shape, TypeDescriptor};

use crate::GenConfig;

/// Expression text logged for a call whose shape is not recognized.
pub const UNSUPPORTED_INVOCATION_NOTICE: &str =
    "This invocation form is not supported by the expression logger. Please file an issue.";

/// A piece of source text with its span.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snippet {
    pub text: String,
    pub span: LineSpan,
}

impl Snippet {
    pub fn new(text: impl Into<String>, span: LineSpan) -> Self {
        Snippet {
            text: text.into(),
            span,
        }
    }
}

/// How the marker is named at the call.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Callee {
    /// Bare or path-qualified name: `log(..)`, `exlog::log(..)`.
    Identifier { name: Snippet },
    /// Member access on a receiver: `receiver.log(..)`.
    MemberAccess { receiver: Snippet, name: Snippet },
    /// Member binding inside a conditional access: the `.log()` of `x?.log()`.
    MemberBinding { name: Snippet },
}

impl Callee {
    /// The marker name token.
    pub fn name(&self) -> &Snippet {
        match self {
            Callee::Identifier { name }
            | Callee::MemberAccess { name, .. }
            | Callee::MemberBinding { name } => name,
        }
    }
}

/// The conditional-access node enclosing an invocation, if any.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalAccess {
    /// The expression tested for null.
    pub guarded: Snippet,
    /// Whether the invocation is the node's not-null branch.
    pub when_not_null_is_invocation: bool,
}

/// Syntactic view of one marker invocation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvocationSyntax {
    pub callee: Callee,
    pub arguments: Vec<Snippet>,
    pub conditional: Option<ConditionalAccess>,
}

/// One marker call as reported by the front-end.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvocationRecord {
    pub file: String,
    /// Enclosing member name.
    pub member: String,
    /// Span of the whole invocation.
    pub span: LineSpan,
    pub syntax: InvocationSyntax,
    /// Type bound to the marker's type parameter; `None` when unresolved.
    pub type_argument: Option<TypeDescriptor>,
}

/// Extract a call site from one invocation record.
///
/// Never fails: unrecognized shapes degrade to a notice.
pub fn extract(record: &InvocationRecord, config: &GenConfig) -> CallSite {
    let syntax = &record.syntax;
    let ty = record
        .type_argument
        .clone()
        .unwrap_or_else(|| TypeDescriptor::type_parameter(config.type_parameter.as_str()));

    let (shape, expression, anchor) = match (&syntax.callee, syntax.arguments.first()) {
        (_, Some(argument)) => (
            Shape::DirectArgument,
            argument.text.clone(),
            syntax.callee.name().span,
        ),
        (Callee::MemberAccess { receiver, name }, None) => {
            (Shape::FluentReceiver, receiver.text.clone(), name.span)
        }
        (Callee::MemberBinding { name }, None) => match &syntax.conditional {
            Some(access) if access.when_not_null_is_invocation => (
                Shape::ConditionalChain,
                access.guarded.text.clone(),
                name.span,
            ),
            _ => unsupported(record),
        },
        (Callee::Identifier { .. }, None) => unsupported(record),
    };

    tracing::trace!(
        file = %record.file,
        line = anchor.start.line,
        shape = shape.as_str(),
        "extracted call site"
    );

    CallSite {
        position: Position::new(record.file.as_str(), anchor.start.line),
        expression,
        ty,
        shape,
        member: record.member.clone(),
        location: Location::new(record.file.as_str(), anchor),
    }
}

fn unsupported(record: &InvocationRecord) -> (Shape, String, LineSpan) {
    tracing::debug!(
        file = %record.file,
        span = %record.span,
        "unsupported marker invocation shape"
    );
    (
        Shape::Unsupported,
        UNSUPPORTED_INVOCATION_NOTICE.to_string(),
        record.span,
    )
}
