//! Dataset sources and sinks for geoview-countries.
//!
//! This crate provides the I/O around the enrichment engine:
//! - [`DatasetLocation`] - A local path or an http(s) URL
//! - [`fetch_bytes`] - Reads a location, retrying transient HTTP failures
//! - [`load_feature_collection`] / [`load_attribute_records`] - Fetch and parse
//! - [`write_collection`] - Serializes the enriched result to a file or stdout

mod config;
mod fetch;
mod loader;
mod location;
mod retry;
pub mod sink;

pub use config::{RetryConfig, SourceConfig};
pub use fetch::fetch_bytes;
pub use loader::{
    load_attribute_records, load_feature_collection, parse_attribute_records,
    parse_feature_collection,
};
pub use location::DatasetLocation;
pub use retry::with_retry;
pub use sink::{write_collection, OutputTarget};
