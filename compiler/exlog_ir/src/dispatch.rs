//! Synthesized dispatch tables.
//!
//! Two levels: the outer key is the `(file, line)` a marker call reports at
//! run time, the inner level is an ordered list of type-guarded branches.
//! A single-branch entry is unconditional. In a multi-branch entry the first
//! branch whose static type equals the call's type wins.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{Position, TypeDescriptor};

/// One guarded branch: log `expression` when the call's type is `ty`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Branch {
    pub ty: TypeDescriptor,
    pub expression: String,
}

impl Branch {
    pub fn new(ty: TypeDescriptor, expression: impl Into<String>) -> Self {
        Branch {
            ty,
            expression: expression.into(),
        }
    }
}

/// Branches in discovery order; most positions hold exactly one.
pub type Branches = SmallVec<[Branch; 1]>;

/// All branches for one source position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DispatchEntry {
    pub position: Position,
    /// Enclosing member reported for this line.
    pub member: String,
    pub branches: Branches,
}

impl DispatchEntry {
    /// Whether the entry runs its only branch without a type test.
    #[inline]
    pub fn is_unconditional(&self) -> bool {
        self.branches.len() == 1
    }

    /// Select the branch for a call whose type argument is `ty`.
    ///
    /// Returns `None` when the entry is guarded and no guard matches. The
    /// generator assumes this cannot happen for calls it discovered, but
    /// nothing proves it, so callers must treat `None` as a real outcome.
    pub fn select(&self, ty: &TypeDescriptor) -> Option<&Branch> {
        if self.is_unconditional() {
            return self.branches.first();
        }
        self.branches.iter().find(|branch| &branch.ty == ty)
    }
}

/// Ordered dispatch entries with a `file -> line -> entry` index.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct DispatchTable {
    entries: Vec<DispatchEntry>,
    index: FxHashMap<String, FxHashMap<u32, usize>>,
}

impl DispatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. A later entry for an already indexed position is
    /// kept in order but shadowed for lookup; the first one wins.
    pub fn push(&mut self, entry: DispatchEntry) {
        let slot = self.entries.len();
        self.index
            .entry(entry.position.file.clone())
            .or_default()
            .entry(entry.position.line)
            .or_insert(slot);
        self.entries.push(entry);
    }

    /// Look up the entry for a reported position.
    pub fn get(&self, file: &str, line: u32) -> Option<&DispatchEntry> {
        let slot = *self.index.get(file)?.get(&line)?;
        self.entries.get(slot)
    }

    /// Entries in the order they were synthesized.
    pub fn entries(&self) -> &[DispatchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<DispatchEntry> for DispatchTable {
    fn from_iter<I: IntoIterator<Item = DispatchEntry>>(iter: I) -> Self {
        let mut table = DispatchTable::new();
        for entry in iter {
            table.push(entry);
        }
        table
    }
}
