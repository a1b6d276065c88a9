//! Shared data model for the expression logger.
//!
//! Everything the generator produces and the runtime consumes lives here:
//!
//! - [`TypeDescriptor`]: closed model of a static or runtime type shape,
//!   plus its display algorithm ([`ty::format`]).
//! - [`CallSite`]: one discovered marker invocation, normalized.
//! - [`DispatchTable`]: position-keyed, type-guarded branches synthesized
//!   from clustered call sites.
//! - [`LineSpan`] / [`Location`]: 1-based source positions.

pub mod call_site;
pub mod dispatch;
pub mod span;
pub mod stack;
pub mod ty;

pub use call_site::{CallSite, Position, Shape};
pub use dispatch::{Branch, DispatchEntry, DispatchTable};
pub use span::{LineCol, LineSpan, Location};
pub use ty::{render_type, ArityError, DeclaringType, NamedType, TypeDescriptor};
