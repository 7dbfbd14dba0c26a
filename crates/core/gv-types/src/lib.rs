//! Core types for geoview-countries.
//!
//! This crate provides the data model shared by the loaders, the enrichment
//! engine and the CLI:
//! - [`Feature`] / [`FeatureCollection`] - GeoJSON borders with a mutable property bag
//! - [`AttributeRecord`] - One country's descriptive attributes (restcountries shape)
//! - [`CodeMap`] - Insertion-ordered code-keyed mapping (languages, currencies)
//! - [`Metadata`] - Provenance block attached to an enriched collection

pub mod feature;
pub mod metadata;
pub mod record;

pub use feature::*;
pub use metadata::*;
pub use record::*;
