//! GeoJSON feature types and identity extraction.

use crate::Metadata;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property fields holding the ISO alpha-3 code, in lookup priority order.
///
/// Different vintages of the borders dataset use different casings.
pub const CODE_FIELDS: [&str; 4] = ["iso_a3", "ISO_A3", "adm0_a3", "ADM0_A3"];

/// Property fields holding the display name, in lookup priority order.
pub const NAME_FIELDS: [&str; 4] = ["NAME", "ADMIN", "name", "admin"];

/// Natural Earth's placeholder for "no code assigned".
pub const MISSING_CODE: &str = "-99";

/// A single GeoJSON feature: one country's shape plus its property bag.
///
/// The geometry is opaque and never modified. Members other than `type`,
/// `geometry` and `properties` (e.g. `id`, `bbox`) are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// GeoJSON object type, always "Feature" for well-formed input
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,

    /// Geometry object (opaque)
    #[serde(default)]
    pub geometry: Value,

    /// Property bag; `null` in the source stays `None`
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,

    /// Any other foreign members
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Feature {
    /// Creates a feature with the given properties and a null geometry.
    pub fn new(properties: Map<String, Value>) -> Self {
        Self {
            kind: feature_type(),
            geometry: Value::Null,
            properties: Some(properties),
            extra: Map::new(),
        }
    }

    /// Sets the geometry.
    pub fn with_geometry(mut self, geometry: Value) -> Self {
        self.geometry = geometry;
        self
    }

    /// Extracts the fields used to match this feature against attribute records.
    pub fn identity(&self) -> FeatureIdentity {
        match &self.properties {
            Some(props) => FeatureIdentity::from_properties(props),
            None => FeatureIdentity::default(),
        }
    }
}

fn feature_type() -> String {
    "Feature".to_string()
}

fn collection_type() -> String {
    "FeatureCollection".to_string()
}

/// The identifying fields of a feature: an alpha-3 code and a display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureIdentity {
    /// Uppercased alpha-3 code, if any field carried a usable one
    pub code: Option<String>,

    /// Display name as found in the properties (not normalized)
    pub name: Option<String>,
}

impl FeatureIdentity {
    /// Builds an identity from explicit values.
    pub fn new(code: Option<&str>, name: Option<&str>) -> Self {
        Self {
            code: code.and_then(usable_code),
            name: name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        }
    }

    /// Reads the identity from a property bag.
    ///
    /// The code comes from the first of [`CODE_FIELDS`] holding a non-empty
    /// value other than [`MISSING_CODE`]; the name from the first non-empty
    /// of [`NAME_FIELDS`].
    pub fn from_properties(props: &Map<String, Value>) -> Self {
        let code = CODE_FIELDS
            .iter()
            .filter_map(|field| props.get(*field).and_then(Value::as_str))
            .find_map(usable_code);

        Self {
            code,
            name: first_text(props, &NAME_FIELDS).map(str::to_string),
        }
    }
}

fn usable_code(raw: &str) -> Option<String> {
    let code = raw.trim();
    if code.is_empty() || code == MISSING_CODE {
        None
    } else {
        Some(code.to_uppercase())
    }
}

/// Returns the first non-empty string value among `fields`.
pub fn first_text<'a>(props: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a str> {
    fields
        .iter()
        .filter_map(|field| props.get(*field).and_then(Value::as_str))
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// A GeoJSON feature collection, optionally carrying run metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// GeoJSON object type, always "FeatureCollection" for well-formed input
    #[serde(rename = "type", default = "collection_type")]
    pub kind: String,

    /// Features in source order
    pub features: Vec<Feature>,

    /// Provenance block stamped after enrichment
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// Any other foreign members (including a stale `metadata` from a previous run)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeatureCollection {
    /// Creates a collection from features.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: collection_type(),
            features,
            metadata: None,
            extra: Map::new(),
        }
    }

    /// Returns the number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the collection has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Attaches a metadata block, replacing any carried over from the input.
    pub fn attach_metadata(&mut self, metadata: Metadata) {
        self.extra.remove("metadata");
        self.metadata = Some(metadata);
    }
}
