//! Build-time half of the expression logger.
//!
//! The front-end reports every marker call it found as an
//! [`InvocationRecord`]. [`generate`] turns those into:
//!
//! - a [`DispatchTable`](exlog_ir::DispatchTable) keyed by `(file, line)`
//! - `W0001` warnings for same-line calls that cannot be told apart
//! - the Rust source unit that performs the dispatch at run time
//!
//! # Debugging
//!
//! Call [`init_tracing`] and set `RUST_LOG=exlog_gen=debug` to see clustering
//! decisions, or `RUST_LOG=exlog_gen=trace` for every extracted call site.

pub mod cluster;
mod config;
pub mod emit;
pub mod extract;
pub mod pipeline;
pub mod synth;

use std::sync::Once;

pub use cluster::{are_distinguishable, cluster_sites, Cluster, ClusterFold, Clustered};
pub use config::GenConfig;
pub use emit::emit_source;
pub use extract::{
    extract, Callee, ConditionalAccess, InvocationRecord, InvocationSyntax, Snippet,
    UNSUPPORTED_INVOCATION_NOTICE,
};
pub use pipeline::{generate, Cancellation, Cancelled, Generated, NeverCancel};
pub use synth::{synthesize, synthesize_table};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
