//! Diagnostics for the expression logging generator.
//!
//! The generator reports two kinds of problem, both as warnings:
//! - [`ErrorCode::W0001`]: two marker calls on one line whose types cannot
//!   be told apart
//! - [`ErrorCode::W0002`]: a line reported again after other lines, which
//!   would need a second dispatch entry for the same key
//!
//! Diagnostics carry:
//! - a stable code for searchability
//! - a message (what went wrong)
//! - a primary location (where it went wrong)
//! - secondary labels, notes and suggestions (why, and how to fix)
//!
//! [`Diagnostic`] implements `Display` in a compiler-style layout, which is
//! all a build script needs to surface it.

mod diagnostic;
mod error_code;

pub use diagnostic::{duplicate_log_usage, revisited_position, Diagnostic, Label};
pub use error_code::ErrorCode;
