//! Logging entry points.
//!
//! Two ways to reach the console line:
//!
//! - Generated code has already dispatched on `(file, line)` and the call's
//!   type, so it calls [`log_to_console`] directly, or [`report_unmatched`] /
//!   [`report_missing`] when its own dispatch came up empty.
//! - A [`Logger`] owns a [`DispatchTable`] and evaluates it per call, for
//!   hosts that load the table as data instead of compiling generated code.

use std::io::{self, Write};
use std::panic::Location;

use exlog_ir::{DispatchTable, TypeDescriptor};
use parking_lot::Mutex;

use crate::dispatch::{evaluate, Dispatch};
use crate::line::format_line;
use crate::Inspect;

/// Why a call was not logged.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("no dispatch entry for {file}:{line}")]
    Missing { file: String, line: u32 },

    #[error("no dispatch branch at {file}:{line} accepts type `{ty}`")]
    Unmatched {
        file: String,
        line: u32,
        ty: TypeDescriptor,
    },

    #[error("failed to write log line: {0}")]
    Io(#[from] io::Error),
}

/// Print one log line to stdout.
pub fn log_to_console<T: Inspect + ?Sized>(
    value: &T,
    expression: &str,
    member: &str,
    caller: &Location<'_>,
) {
    println!(
        "{}",
        format_line(caller.file(), caller.line(), member, expression, &value.to_value())
    );
}

/// Report a call whose type matched none of its position's branches.
#[cold]
pub fn report_unmatched(ty: &TypeDescriptor, caller: &Location<'_>) {
    tracing::error!(
        file = caller.file(),
        line = caller.line(),
        ty = %ty,
        "no dispatch branch accepts the call's type; nothing logged"
    );
}

/// Report a call at a position the generator never saw.
#[cold]
pub fn report_missing(caller: &Location<'_>) {
    tracing::error!(
        file = caller.file(),
        line = caller.line(),
        "no dispatch entry for this call; regenerate the dispatch unit"
    );
}

/// Table-driven logger writing to any sink.
///
/// Safe to share between threads; lines from concurrent calls never
/// interleave.
pub struct Logger<W> {
    table: DispatchTable,
    sink: Mutex<W>,
}

impl<W: Write> Logger<W> {
    pub fn new(table: DispatchTable, sink: W) -> Self {
        Logger {
            table,
            sink: Mutex::new(sink),
        }
    }

    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    /// Log `value` for the calling position.
    #[track_caller]
    pub fn log<T: Inspect + ?Sized>(&self, value: &T) -> Result<(), LogError> {
        let caller = Location::caller();
        self.log_at(value, caller.file(), caller.line())
    }

    /// Log `value` as if called from `file:line`.
    pub fn log_at<T: Inspect + ?Sized>(
        &self,
        value: &T,
        file: &str,
        line: u32,
    ) -> Result<(), LogError> {
        let ty = T::type_descriptor();
        match evaluate(&self.table, file, line, &ty) {
            Dispatch::Matched { entry, branch } => {
                let text =
                    format_line(file, line, &entry.member, &branch.expression, &value.to_value());
                let mut sink = self.sink.lock();
                writeln!(sink, "{text}")?;
                Ok(())
            }
            Dispatch::Unmatched { .. } => {
                tracing::error!(file, line, ty = %ty, "no dispatch branch accepts the call's type");
                Err(LogError::Unmatched {
                    file: file.to_string(),
                    line,
                    ty,
                })
            }
            Dispatch::Missing => {
                tracing::error!(file, line, "no dispatch entry for this call");
                Err(LogError::Missing {
                    file: file.to_string(),
                    line,
                })
            }
        }
    }

    /// Consume the logger and return its sink.
    pub fn into_sink(self) -> W {
        self.sink.into_inner()
    }
}
