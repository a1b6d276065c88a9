//! Diagnostic codes.
//!
//! Codes are stable identifiers so build output can be searched and
//! filtered.

use std::fmt;

/// Codes for every diagnostic the generator can report.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Two marker calls on one line cannot be told apart by type
    W0001,
    /// A line reappears after other lines already followed it
    W0002,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "W0001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::W0001 => "W0001",
            ErrorCode::W0002 => "W0002",
        }
    }

    /// One-line description, used as the diagnostic title.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::W0001 => {
                "the expression will not be logged correctly - consider moving it to a separate line"
            }
            ErrorCode::W0002 => {
                "the expression will not be logged - its line was already instrumented earlier"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
