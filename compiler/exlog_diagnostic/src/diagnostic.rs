//! Core diagnostic types.
//!
//! Defines [`Diagnostic`] and [`Label`]. Every diagnostic is a warning: the
//! generator never aborts on one. They are collected next to the artifact
//! and handed to the host build for display.

use std::fmt;

use exlog_ir::Location;

use crate::ErrorCode;

/// A labeled location with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub location: Location,
    pub message: String,
    /// Whether this is the location the diagnostic is about.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(location: Location, message: impl Into<String>) -> Self {
        Label {
            location,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(location: Location, message: impl Into<String>) -> Self {
        Label {
            location,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A diagnostic with everything needed to render it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the offending location.
    pub fn with_label(mut self, location: Location, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(location, message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(mut self, location: Location, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(location, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Location of the first primary label.
    pub fn primary_location(&self) -> Option<&Location> {
        self.labels
            .iter()
            .find(|l| l.is_primary)
            .map(|l| &l.location)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning[{}]: {}", self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {marker} {}: {}", label.location, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }

        Ok(())
    }
}

/// Create a "duplicate log usage" warning.
///
/// `dropped` is the marker call that will not be instrumented; `kept` is the
/// earlier call on the same line that owns the dispatch slot.
pub fn duplicate_log_usage(dropped: Location, kept: Location, ty: &str) -> Diagnostic {
    let code = ErrorCode::W0001;
    Diagnostic::warning(code)
        .with_message(code.description())
        .with_label(dropped, "this call is not instrumented")
        .with_secondary_label(kept, format!("earlier call on this line, logged as `{ty}`"))
        .with_note("calls on one line are told apart only by distinct, fully known types")
        .with_suggestion("move the expression to its own line")
}

/// Create a "position revisited" warning.
///
/// `dropped` is a marker call whose `(file, line)` already received a
/// dispatch entry earlier in the input, with other positions in between.
/// `first` is the first call that created that entry.
pub fn revisited_position(dropped: Location, first: Location) -> Diagnostic {
    let code = ErrorCode::W0002;
    Diagnostic::warning(code)
        .with_message(code.description())
        .with_label(dropped, "this call is not instrumented")
        .with_secondary_label(first, "this line's dispatch entry was built here")
        .with_note("call sites must be reported grouped by line")
}
