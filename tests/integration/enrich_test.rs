//! End-to-end enrichment: load, enrich, write, reparse.

use crate::common::{borders, countries, feature, FixtureContext};
use gv_enrichment::{CurrencyPolicy, Enricher, EnrichmentOptions};
use gv_source::{load_attribute_records, load_feature_collection, write_collection, OutputTarget};
use gv_types::SourceIds;
use serde_json::{json, Value};

async fn run(ctx: &FixtureContext, options: EnrichmentOptions) -> Value {
    let geojson = ctx.write_json("borders.geojson", &borders());
    let data = ctx.write_json("countries.json", &countries());
    let sources = SourceIds::new(geojson.to_string(), data.to_string());

    let collection = load_feature_collection(&geojson, &ctx.config).await.unwrap();
    let records = load_attribute_records(&data, &ctx.config).await.unwrap();

    let enricher = Enricher::new(records, options);
    let (collection, report) = enricher.enrich_collection(collection, &sources);
    assert_eq!(report.total, 3);
    assert_eq!(report.enriched, 2);
    assert_eq!(report.by_code, 1);
    assert_eq!(report.by_name, 1);

    let out = ctx.path("enriched.geojson");
    write_collection(&collection, &OutputTarget::File(out.clone()), true)
        .await
        .unwrap();

    serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap()
}

#[tokio::test]
async fn test_end_to_end_enrichment() {
    let ctx = FixtureContext::new();
    let output = run(&ctx, EnrichmentOptions::new().with_population_year(2024)).await;

    assert_eq!(output["type"], json!("FeatureCollection"));
    assert_eq!(output["name"], json!("ne_110m_admin_0_countries"));

    let features = output["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);

    let france = &features[0]["properties"];
    assert_eq!(france["ISO_A3"], json!("FRA"));
    assert_eq!(france["iso_a2"], json!("FR"));
    assert_eq!(france["population_updated"], json!(67391582));
    assert_eq!(france["population_year"], json!(2024));
    assert_eq!(france["capital"], json!("Paris"));
    assert_eq!(france["languages"], json!(["French"]));
    assert_eq!(france["currency_name"], json!("Euro"));
    assert_eq!(france["currency_symbol"], json!("€"));
    assert_eq!(france["name_updated"], json!("France"));
    assert_eq!(france["continent_updated"], json!("Europe"));
    assert_eq!(france["unMember"], json!(true));
    assert!(france.get("currencies").is_none());

    let ivory_coast = &features[1]["properties"];
    assert_eq!(ivory_coast["NAME"], json!("Republic of Cote d'Ivoire"));
    assert_eq!(ivory_coast["iso_a3"], json!("CIV"));
    assert_eq!(ivory_coast["name_updated"], json!("Ivory Coast"));
    assert_eq!(ivory_coast["capital"], json!("Yamoussoukro"));

    assert_eq!(
        features[2]["properties"],
        json!({"ISO_A3": "ZZZ", "NAME": "Atlantis"})
    );
    assert_eq!(features[2]["geometry"]["type"], json!("Polygon"));

    let metadata = &output["metadata"];
    assert_eq!(metadata["countries_enriched"], json!(2));
    assert_eq!(metadata["total_features"], json!(3));
    assert!(metadata["source_geojson"]
        .as_str()
        .unwrap()
        .ends_with("borders.geojson"));
    assert!(metadata["source_data"]
        .as_str()
        .unwrap()
        .ends_with("countries.json"));
    assert!(metadata["last_updated"].as_str().is_some());
}

#[tokio::test]
async fn test_all_currencies_policy() {
    let ctx = FixtureContext::new();
    let output = run(
        &ctx,
        EnrichmentOptions::new().with_currency_policy(CurrencyPolicy::All),
    )
    .await;

    assert_eq!(
        output["features"][0]["properties"]["currencies"],
        json!([{"code": "EUR", "name": "Euro", "symbol": "€"}])
    );
}

#[tokio::test]
async fn test_rerun_replaces_stale_metadata() {
    let ctx = FixtureContext::new();
    let first = run(&ctx, EnrichmentOptions::new()).await;

    let previous = ctx.write_json("previous.geojson", &first);
    let data = ctx.write_json("countries.json", &countries());
    let collection = load_feature_collection(&previous, &ctx.config).await.unwrap();
    let records = load_attribute_records(&data, &ctx.config).await.unwrap();

    let enricher = Enricher::new(records, EnrichmentOptions::new());
    let (collection, report) =
        enricher.enrich_collection(collection, &SourceIds::new("previous", "countries"));

    assert_eq!(report.enriched, 2);
    let metadata = collection.metadata.as_ref().unwrap();
    assert_eq!(metadata.source_geojson, "previous");
    assert!(!collection.extra.contains_key("metadata"));

    let value = serde_json::to_value(&collection).unwrap();
    assert_eq!(value["metadata"]["source_data"], json!("countries"));
}

#[tokio::test]
async fn test_empty_collection() {
    let ctx = FixtureContext::new();
    let geojson = ctx.write_json(
        "empty.geojson",
        &json!({"type": "FeatureCollection", "features": []}),
    );
    let data = ctx.write_json("countries.json", &countries());

    let collection = load_feature_collection(&geojson, &ctx.config).await.unwrap();
    let records = load_attribute_records(&data, &ctx.config).await.unwrap();

    let enricher = Enricher::new(records, EnrichmentOptions::new());
    let (collection, report) = enricher.enrich_collection(collection, &SourceIds::new("g", "d"));

    assert!(collection.is_empty());
    assert!(report.is_complete());
    let metadata = collection.metadata.unwrap();
    assert_eq!(metadata.countries_enriched, 0);
    assert_eq!(metadata.total_features, 0);
}

#[tokio::test]
async fn test_feature_without_properties_passes_through() {
    let ctx = FixtureContext::new();
    let mut bare = feature(json!(null));
    bare["id"] = json!("bare");
    let geojson = ctx.write_json(
        "bare.geojson",
        &json!({"type": "FeatureCollection", "features": [bare]}),
    );
    let data = ctx.write_json("countries.json", &countries());

    let collection = load_feature_collection(&geojson, &ctx.config).await.unwrap();
    let records = load_attribute_records(&data, &ctx.config).await.unwrap();

    let enricher = Enricher::new(records, EnrichmentOptions::new());
    let (collection, report) = enricher.enrich_collection(collection, &SourceIds::new("g", "d"));

    assert_eq!(report.unmatched.len(), 1);
    let value = serde_json::to_value(&collection.features[0]).unwrap();
    assert_eq!(value["properties"], Value::Null);
    assert_eq!(value["id"], json!("bare"));
}
