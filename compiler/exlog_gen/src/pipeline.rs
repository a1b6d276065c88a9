//! Generation pipeline: extract → cluster → synthesize → emit.
//!
//! A pure function of its input records. Diagnostics never stop the pass;
//! they are returned next to the artifact. Cancellation is the one outcome
//! that yields no artifact at all.

use std::sync::atomic::{AtomicBool, Ordering};

use exlog_diagnostic::Diagnostic;
use exlog_ir::DispatchTable;

use crate::cluster::ClusterFold;
use crate::emit::emit_source;
use crate::extract::{extract, InvocationRecord};
use crate::synth::synthesize;
use crate::GenConfig;

/// Cooperative cancellation, polled between call sites.
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

impl Cancellation for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<C: Cancellation + ?Sized> Cancellation for &C {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// Cancellation source that never fires.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverCancel;

impl Cancellation for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// The pass was cancelled; nothing was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("generation cancelled after {processed} call sites")]
pub struct Cancelled {
    pub processed: usize,
}

/// Everything one generation pass produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    pub table: DispatchTable,
    pub diagnostics: Vec<Diagnostic>,
    /// Rendered Rust source unit.
    pub source: String,
}

impl Generated {
    /// Every diagnostic is a warning.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Run the full pass over records in discovery order.
#[tracing::instrument(level = "debug", skip_all)]
pub fn generate<'a>(
    records: impl IntoIterator<Item = &'a InvocationRecord>,
    config: &GenConfig,
    cancel: &impl Cancellation,
) -> Result<Generated, Cancelled> {
    let mut fold = ClusterFold::new();
    let mut table = DispatchTable::new();
    let mut processed = 0;

    for record in records {
        if cancel.is_cancelled() {
            tracing::debug!(processed, "generation cancelled");
            return Err(Cancelled { processed });
        }
        if let Some(sealed) = fold.push(extract(record, config)) {
            table.push(synthesize(sealed));
        }
        processed += 1;
    }

    if cancel.is_cancelled() {
        tracing::debug!(processed, "generation cancelled before emission");
        return Err(Cancelled { processed });
    }

    let (last, diagnostics) = fold.finish();
    if let Some(last) = last {
        table.push(synthesize(last));
    }

    for diagnostic in &diagnostics {
        if let Some(location) = diagnostic.primary_location() {
            tracing::warn!(code = %diagnostic.code, %location, "{}", diagnostic.message);
        }
    }

    let source = emit_source(&table, config);
    tracing::debug!(
        sites = processed,
        entries = table.len(),
        warnings = diagnostics.len(),
        "generation complete"
    );

    Ok(Generated {
        table,
        diagnostics,
        source,
    })
}
