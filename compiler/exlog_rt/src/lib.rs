//! Run-time half of the expression logger.
//!
//! Generated dispatch code calls into this crate to print a logged
//! expression as
//!
//! ```text
//! [main.rs:12 (main)] items = { 1, 2, 3 } (List<Int32>)
//! ```
//!
//! - [`Inspect`] turns a Rust value into a [`Value`] and names its static type.
//! - [`render_value`] and [`render_type`] are the two printers.
//! - [`log_to_console`], [`report_unmatched`] and [`report_missing`] are what
//!   the generated unit links against.
//! - [`Logger`] evaluates a [`DispatchTable`] directly, without generated code.

pub mod dispatch;
mod inspect;
pub mod line;
mod logger;
mod value;
mod value_fmt;

pub use dispatch::{evaluate, Dispatch};
pub use exlog_ir::{render_type, DeclaringType, DispatchTable, NamedType, TypeDescriptor};
pub use inspect::Inspect;
pub use line::format_line;
pub use logger::{log_to_console, report_missing, report_unmatched, LogError, Logger};
pub use value::Value;
pub use value_fmt::{render_value, write_value};
