//! Provenance metadata attached to an enriched collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifiers of the two source datasets (paths or URLs as given).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceIds {
    /// Borders dataset
    pub geojson: String,

    /// Attributes dataset
    pub data: String,
}

impl SourceIds {
    pub fn new(geojson: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            geojson: geojson.into(),
            data: data.into(),
        }
    }
}

/// Top-level `metadata` block of an enriched collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// When the enrichment ran
    pub last_updated: DateTime<Utc>,

    /// Identifier of the borders dataset
    pub source_geojson: String,

    /// Identifier of the attributes dataset
    pub source_data: String,

    /// Number of features that received attributes
    pub countries_enriched: usize,

    /// Number of features in the collection
    pub total_features: usize,
}

impl Metadata {
    pub fn new(
        last_updated: DateTime<Utc>,
        sources: &SourceIds,
        countries_enriched: usize,
        total_features: usize,
    ) -> Self {
        Self {
            last_updated,
            source_geojson: sources.geojson.clone(),
            source_data: sources.data.clone(),
            countries_enriched,
            total_features,
        }
    }

    /// Fraction of features enriched, 0.0 for an empty collection.
    pub fn coverage(&self) -> f64 {
        if self.total_features == 0 {
            0.0
        } else {
            self.countries_enriched as f64 / self.total_features as f64
        }
    }
}
