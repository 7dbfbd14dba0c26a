//! Dataset loading and sink tests against real files.

use crate::common::{borders, countries, FixtureContext};
use gv_error::{DatasetError, GvError, SourceError};
use gv_source::{
    load_attribute_records, load_feature_collection, write_collection, DatasetLocation,
    OutputTarget,
};
use gv_types::FeatureCollection;
use serde_json::json;

#[tokio::test]
async fn test_load_fixture_datasets() {
    let ctx = FixtureContext::new();
    let geojson = ctx.write_json("borders.geojson", &borders());
    let data = ctx.write_json("countries.json", &countries());

    let collection = load_feature_collection(&geojson, &ctx.config).await.unwrap();
    let records = load_attribute_records(&data, &ctx.config).await.unwrap();

    assert_eq!(collection.len(), 3);
    assert_eq!(records.len(), 3);

    let languages: Vec<&str> = records[2].languages.values().map(String::as_str).collect();
    assert_eq!(languages, vec!["Afrikaans", "English", "Zulu"]);
}

#[tokio::test]
async fn test_missing_file_is_source_error() {
    let ctx = FixtureContext::new();
    let location = DatasetLocation::File(ctx.path("absent.geojson"));

    let result = load_feature_collection(&location, &ctx.config).await;
    assert!(matches!(result, Err(GvError::Source(SourceError::NotFound(_)))));
}

#[tokio::test]
async fn test_structural_errors_are_dataset_errors() {
    let ctx = FixtureContext::new();

    let no_features = ctx.write_json("bad.geojson", &json!({"type": "FeatureCollection"}));
    let result = load_feature_collection(&no_features, &ctx.config).await;
    assert!(matches!(
        result,
        Err(GvError::Dataset(DatasetError::MissingMember { .. }))
    ));

    let not_array = ctx.write_json("bad.json", &json!({"FRA": {}}));
    let result = load_attribute_records(&not_array, &ctx.config).await;
    assert!(matches!(
        result,
        Err(GvError::Dataset(DatasetError::UnexpectedShape { .. }))
    ));
}

#[tokio::test]
async fn test_write_then_reload() {
    let ctx = FixtureContext::new();
    let geojson = ctx.write_json("borders.geojson", &borders());
    let collection = load_feature_collection(&geojson, &ctx.config).await.unwrap();

    let out = ctx.path("out/copy.geojson");
    write_collection(&collection, &OutputTarget::File(out.clone()), false)
        .await
        .unwrap();

    let reloaded: FeatureCollection =
        serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
    assert_eq!(reloaded, collection);
}
