//! Evaluating a dispatch table for one call.

use exlog_ir::{Branch, DispatchEntry, DispatchTable, TypeDescriptor};

/// Outcome of looking up one call in a dispatch table.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Dispatch<'a> {
    /// A branch was selected.
    Matched {
        entry: &'a DispatchEntry,
        branch: &'a Branch,
    },
    /// The position is known but no branch guard accepts the type.
    Unmatched { entry: &'a DispatchEntry },
    /// No entry exists for the position.
    Missing,
}

impl<'a> Dispatch<'a> {
    pub fn branch(self) -> Option<&'a Branch> {
        match self {
            Dispatch::Matched { branch, .. } => Some(branch),
            Dispatch::Unmatched { .. } | Dispatch::Missing => None,
        }
    }
}

/// Select the branch for a call at `file:line` whose static type is `ty`.
pub fn evaluate<'a>(
    table: &'a DispatchTable,
    file: &str,
    line: u32,
    ty: &TypeDescriptor,
) -> Dispatch<'a> {
    let Some(entry) = table.get(file, line) else {
        return Dispatch::Missing;
    };
    match entry.select(ty) {
        Some(branch) => Dispatch::Matched { entry, branch },
        None => Dispatch::Unmatched { entry },
    }
}
