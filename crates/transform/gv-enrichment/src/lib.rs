//! Enrichment engine for geoview-countries.
//!
//! This crate joins a borders feature collection with a country attributes
//! dataset:
//! - [`normalize_name`] - Diacritic- and case-insensitive comparison key
//! - [`AttributeIndex`] - O(1) alpha-3 lookup, last record wins on collision
//! - [`Matcher`] - Code lookup with a normalized-name fallback scan
//! - [`map_fields`] - Flattens one record into the fixed output schema
//! - [`Enricher`] - Runs match + map + merge over every feature
//! - [`stamp`] - Builds the provenance metadata block
//!
//! Everything here is synchronous and performs no I/O.
//!
//! # Example
//!
//! ```rust,ignore
//! use gv_enrichment::{Enricher, EnrichmentOptions};
//! use gv_types::SourceIds;
//!
//! let enricher = Enricher::new(records, EnrichmentOptions::default());
//! let (collection, report) = enricher.enrich_collection(
//!     collection,
//!     &SourceIds::new("borders.geojson", "countries.json"),
//! );
//! println!("{} of {} enriched", report.enriched, report.total);
//! ```

mod config;
mod engine;
mod fields;
mod index;
mod matcher;
mod normalize;
mod provenance;

pub use config::{CurrencyPolicy, EnrichmentOptions};
pub use engine::{Enriched, Enricher, EnrichmentReport, UnmatchedFeature};
pub use fields::{map_fields, FieldOptions, NOT_AVAILABLE};
pub use index::AttributeIndex;
pub use matcher::{MatchMethod, MatchOutcome, Matcher};
pub use normalize::normalize_name;
pub use provenance::stamp;
