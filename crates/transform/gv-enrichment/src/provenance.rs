//! Provenance stamping.

use chrono::Utc;
use gv_types::{Metadata, SourceIds};

/// Builds the metadata block for a finished run, timestamped now.
///
/// `enriched` must not exceed `total`; both come from the run's report.
pub fn stamp(enriched: usize, total: usize, sources: &SourceIds) -> Metadata {
    debug_assert!(enriched <= total, "enriched {enriched} > total {total}");
    Metadata::new(Utc::now(), sources, enriched, total)
}
