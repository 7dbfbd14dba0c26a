//! Integration tests for geoview-countries.
//!
//! Each test writes fixture datasets to a temporary directory, loads them
//! through `gv-source`, enriches with `gv-enrichment` and reparses the
//! written output. No network access is needed.
//!
//! ```bash
//! cargo test -p integration-tests
//! ```

mod common;
mod enrich_test;
mod source_test;
