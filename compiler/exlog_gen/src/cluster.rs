//! Position clustering and same-line disambiguation.
//!
//! Call sites arrive in discovery order. Consecutive sites that report the
//! same `(file, line)` form one [`Cluster`]; inside a cluster every site
//! must be distinguishable from the others by its static type, since that
//! type is the only thing the runtime can branch on. A site that cannot be
//! told apart from one already in its cluster is dropped with a `W0001`
//! warning, and the earlier site keeps the slot.
//!
//! The fold holds exactly one open cluster. It is sealed and handed back as
//! soon as a site at another position arrives, or when the fold finishes.
//! Sites must arrive grouped by position: one that comes back to an already
//! sealed position is dropped with a `W0002` warning, since its line already
//! has a dispatch entry.

use exlog_diagnostic::{duplicate_log_usage, revisited_position, Diagnostic};
use exlog_ir::{CallSite, Location, Position, TypeDescriptor};
use rustc_hash::FxHashMap;

/// Call sites sharing one dispatch position, pairwise distinguishable.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Cluster {
    pub position: Position,
    /// Sites in discovery order. Never empty.
    pub sites: Vec<CallSite>,
}

impl Cluster {
    fn open(site: CallSite) -> Self {
        Cluster {
            position: site.position.clone(),
            sites: vec![site],
        }
    }

    /// The first site whose type cannot be told apart from `ty`.
    fn conflict_with(&self, ty: &TypeDescriptor) -> Option<&CallSite> {
        self.sites
            .iter()
            .find(|site| !are_distinguishable(&site.ty, ty))
    }
}

/// Whether a runtime type test can separate two static types.
///
/// Equal types cannot be separated. Neither can a type that mentions a type
/// parameter: it may be instantiated to anything, including the other type.
pub fn are_distinguishable(a: &TypeDescriptor, b: &TypeDescriptor) -> bool {
    a != b && !a.is_open() && !b.is_open()
}

/// Single-pass clustering accumulator.
#[derive(Default, Debug)]
pub struct ClusterFold {
    open: Option<Cluster>,
    /// Sealed positions, with the location of each one's first site.
    sealed: FxHashMap<Position, Location>,
    diagnostics: Vec<Diagnostic>,
}

impl ClusterFold {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next site. Returns the cluster it sealed, if any.
    pub fn push(&mut self, site: CallSite) -> Option<Cluster> {
        let Some(open) = &mut self.open else {
            self.open = Some(Cluster::open(site));
            return None;
        };

        if open.position != site.position {
            if let Some(first) = self.sealed.get(&site.position) {
                tracing::debug!(position = %site.position, "dropping call site at a sealed position");
                self.diagnostics.push(revisited_position(site.location, first.clone()));
                return None;
            }
            let sealed = self.open.replace(Cluster::open(site));
            if let Some(cluster) = &sealed {
                self.sealed
                    .insert(cluster.position.clone(), cluster.sites[0].location.clone());
            }
            return sealed;
        }

        if let Some(kept) = open.conflict_with(&site.ty) {
            tracing::debug!(
                position = %site.position,
                kept = %kept.ty,
                dropped = %site.ty,
                "dropping indistinguishable call site"
            );
            self.diagnostics.push(duplicate_log_usage(
                site.location.clone(),
                kept.location.clone(),
                &kept.ty.to_string(),
            ));
        } else {
            open.sites.push(site);
        }
        None
    }

    /// Seal the last cluster and return it with every diagnostic raised.
    pub fn finish(self) -> (Option<Cluster>, Vec<Diagnostic>) {
        (self.open, self.diagnostics)
    }
}

/// Result of clustering a whole site sequence.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Clustered {
    pub clusters: Vec<Cluster>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Cluster a complete site sequence.
pub fn cluster_sites(sites: impl IntoIterator<Item = CallSite>) -> Clustered {
    let mut fold = ClusterFold::new();
    let mut clusters = Vec::new();
    for site in sites {
        clusters.extend(fold.push(site));
    }
    let (last, diagnostics) = fold.finish();
    clusters.extend(last);
    Clustered {
        clusters,
        diagnostics,
    }
}
