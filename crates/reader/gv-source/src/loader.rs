//! Dataset parsing: bytes to typed collections.
//!
//! Structural problems (not JSON, no `features` array, attributes not an
//! array) fail here, before anything reaches the enrichment engine.

use crate::{fetch_bytes, DatasetLocation, SourceConfig};
use gv_error::{DatasetError, Result};
use gv_types::{AttributeRecord, FeatureCollection};
use serde_json::Value;
use tracing::info;

/// Fetches and parses a GeoJSON feature collection.
pub async fn load_feature_collection(
    location: &DatasetLocation,
    config: &SourceConfig,
) -> Result<FeatureCollection> {
    let bytes = fetch_bytes(location, config).await?;
    let collection = parse_feature_collection(&bytes, &location.to_string())?;

    info!(
        source = %location,
        features = collection.len(),
        "Loaded feature collection"
    );

    Ok(collection)
}

/// Fetches and parses the attributes dataset.
pub async fn load_attribute_records(
    location: &DatasetLocation,
    config: &SourceConfig,
) -> Result<Vec<AttributeRecord>> {
    let bytes = fetch_bytes(location, config).await?;
    let records = parse_attribute_records(&bytes, &location.to_string())?;

    info!(
        source = %location,
        records = records.len(),
        "Loaded attribute records"
    );

    Ok(records)
}

/// Parses a GeoJSON FeatureCollection document.
pub fn parse_feature_collection(bytes: &[u8], source_id: &str) -> Result<FeatureCollection> {
    let document = parse_json(bytes, source_id)?;

    let object = document
        .as_object()
        .ok_or_else(|| DatasetError::UnexpectedShape {
            source_id: source_id.to_string(),
            message: "top level is not an object".to_string(),
        })?;

    match object.get("features") {
        Some(Value::Array(_)) => {}
        Some(_) => {
            return Err(DatasetError::UnexpectedShape {
                source_id: source_id.to_string(),
                message: "'features' is not an array".to_string(),
            }
            .into())
        }
        None => {
            return Err(DatasetError::MissingMember {
                source_id: source_id.to_string(),
                member: "features".to_string(),
            }
            .into())
        }
    }

    serde_json::from_value(document).map_err(|e| {
        DatasetError::UnexpectedShape {
            source_id: source_id.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Parses the attributes dataset: a JSON array of country records.
pub fn parse_attribute_records(bytes: &[u8], source_id: &str) -> Result<Vec<AttributeRecord>> {
    let document = parse_json(bytes, source_id)?;

    let Value::Array(items) = document else {
        return Err(DatasetError::UnexpectedShape {
            source_id: source_id.to_string(),
            message: "top level is not an array of records".to_string(),
        }
        .into());
    };

    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| -> Result<AttributeRecord> {
            if !item.is_object() {
                return Err(DatasetError::UnexpectedShape {
                    source_id: source_id.to_string(),
                    message: format!("record {position} is not an object"),
                }
                .into());
            }
            serde_json::from_value(item).map_err(|e| {
                DatasetError::UnexpectedShape {
                    source_id: source_id.to_string(),
                    message: format!("record {position}: {e}"),
                }
                .into()
            })
        })
        .collect()
}

fn parse_json(bytes: &[u8], source_id: &str) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|e| {
        DatasetError::Parse {
            source_id: source_id.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}
