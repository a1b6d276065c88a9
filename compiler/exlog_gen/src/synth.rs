//! Dispatch synthesis.
//!
//! Each sealed [`Cluster`] becomes one [`DispatchEntry`]. A cluster of one
//! site yields a single unconditional branch; a larger cluster yields one
//! type-guarded branch per site, in discovery order.

use exlog_ir::{Branch, DispatchEntry, DispatchTable};

use crate::cluster::Cluster;

/// Turn a sealed cluster into its dispatch entry.
pub fn synthesize(cluster: Cluster) -> DispatchEntry {
    let Cluster { position, sites } = cluster;
    let member = sites
        .first()
        .map(|site| site.member.clone())
        .unwrap_or_default();

    let branches = sites
        .into_iter()
        .map(|site| Branch::new(site.ty, site.expression))
        .collect();

    DispatchEntry {
        position,
        member,
        branches,
    }
}

/// Synthesize a whole table from clusters in discovery order.
pub fn synthesize_table(clusters: impl IntoIterator<Item = Cluster>) -> DispatchTable {
    clusters.into_iter().map(synthesize).collect()
}
