//! Shared fixtures for integration tests.

use gv_source::{DatasetLocation, SourceConfig};
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary workspace holding fixture datasets.
pub struct FixtureContext {
    pub dir: TempDir,
    pub config: SourceConfig,
}

impl FixtureContext {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
            config: SourceConfig::new(),
        }
    }

    /// Writes `value` as JSON and returns its location.
    pub fn write_json(&self, name: &str, value: &Value) -> DatasetLocation {
        let path = self.path(name);
        std::fs::write(&path, serde_json::to_vec(value).expect("serialize fixture"))
            .expect("write fixture");
        DatasetLocation::File(path)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// A polygon feature with the given properties.
pub fn feature(properties: Value) -> Value {
    json!({
        "type": "Feature",
        "properties": properties,
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
        }
    })
}

/// Borders fixture: France by code, Ivory Coast by accent-folded official name, one unknown.
pub fn borders() -> Value {
    json!({
        "type": "FeatureCollection",
        "name": "ne_110m_admin_0_countries",
        "features": [
            feature(json!({"ISO_A3": "FRA", "NAME": "France", "CONTINENT": "Europe"})),
            feature(json!({"ISO_A3": "-99", "NAME": "Republic of Cote d'Ivoire", "CONTINENT": "Africa"})),
            feature(json!({"ISO_A3": "ZZZ", "NAME": "Atlantis"})),
        ]
    })
}

/// Attributes fixture in the restcountries shape.
pub fn countries() -> Value {
    json!([
        {
            "cca2": "FR",
            "cca3": "FRA",
            "name": {"common": "France", "official": "French Republic"},
            "population": 67391582,
            "capital": ["Paris"],
            "languages": {"fra": "French"},
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
            "region": "Europe",
            "subregion": "Western Europe",
            "area": 551695.0,
            "unMember": true,
            "flag": "🇫🇷"
        },
        {
            "cca2": "CI",
            "cca3": "CIV",
            "name": {"common": "Ivory Coast", "official": "Republic of Côte d'Ivoire"},
            "population": 26378275,
            "capital": ["Yamoussoukro"],
            "languages": {"fra": "French"},
            "currencies": {"XOF": {"name": "West African CFA franc", "symbol": "Fr"}},
            "region": "Africa",
            "subregion": "Western Africa",
            "area": 322463.0,
            "unMember": true,
            "flag": "🇨🇮"
        },
        {
            "cca2": "ZA",
            "cca3": "ZAF",
            "name": {"common": "South Africa", "official": "Republic of South Africa"},
            "population": 59308690,
            "capital": ["Pretoria", "Bloemfontein", "Cape Town"],
            "languages": {"afr": "Afrikaans", "eng": "English", "zul": "Zulu"},
            "currencies": {"ZAR": {"name": "South African rand", "symbol": "R"}},
            "region": "Africa",
            "subregion": "Southern Africa",
            "unMember": true,
            "flag": "🇿🇦"
        }
    ])
}
