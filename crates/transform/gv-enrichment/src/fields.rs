//! Field mapper - flattens one attribute record into the output schema.
//!
//! Output keys, in order:
//!
//! | key | source |
//! |---|---|
//! | `iso_a2`, `iso_a3` | `cca2`, `cca3` |
//! | `population_updated` | `population` (omitted when absent) |
//! | `population_year` | run year |
//! | `capital` | first non-empty capital (blank entries skipped) or `"N/A"` |
//! | `languages` | language names in source order |
//! | `currency_name`, `currency_symbol` | first currency or `"N/A"` / `""` |
//! | `currencies` | full list, only with [`CurrencyPolicy::All`] |
//! | `name_updated` | common name, else the feature's own name |
//! | `flag` | flag glyph |
//! | `continent_updated`, `region`, `subregion` | record, else the feature's own values |
//! | `area` | area (omitted when absent) |
//! | `unMember` | UN membership, `false` when absent |

use crate::CurrencyPolicy;
use gv_types::{first_text, AttributeRecord, NAME_FIELDS};
use serde_json::{json, Map, Value};

/// Placeholder for a missing capital or currency name.
pub const NOT_AVAILABLE: &str = "N/A";

/// Existing property fields consulted when the record has no region.
const CONTINENT_FALLBACK: [&str; 2] = ["continent_updated", "CONTINENT"];
const REGION_FALLBACK: [&str; 2] = ["region", "REGION_UN"];
const SUBREGION_FALLBACK: [&str; 2] = ["subregion", "SUBREGION"];

/// Per-run settings for the field mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOptions {
    pub population_year: i32,
    pub currency_policy: CurrencyPolicy,
}

/// Maps a record to the flat output fields.
///
/// `existing` is the feature's current property bag, read only for name and
/// region fallbacks. Never fails; a record with every field absent still
/// yields a well-formed mapping.
pub fn map_fields(
    record: &AttributeRecord,
    existing: &Map<String, Value>,
    options: &FieldOptions,
) -> Map<String, Value> {
    let mut fields = Map::new();

    fields.insert("iso_a2".into(), Value::String(record.cca2.clone()));
    fields.insert("iso_a3".into(), Value::String(record.cca3.clone()));

    if let Some(population) = record.population {
        fields.insert("population_updated".into(), Value::from(population));
    }
    fields.insert("population_year".into(), Value::from(options.population_year));

    let capital = record
        .capital
        .iter()
        .map(|c| c.trim())
        .find(|c| !c.is_empty())
        .unwrap_or(NOT_AVAILABLE);
    fields.insert("capital".into(), Value::String(capital.to_string()));

    let languages: Vec<Value> = record
        .languages
        .values()
        .map(|name| Value::String(name.clone()))
        .collect();
    fields.insert("languages".into(), Value::Array(languages));

    let (currency_name, currency_symbol) = match record.currencies.first() {
        Some((_, currency)) => (currency.name.as_str(), currency.symbol.as_str()),
        None => (NOT_AVAILABLE, ""),
    };
    fields.insert("currency_name".into(), Value::String(currency_name.to_string()));
    fields.insert(
        "currency_symbol".into(),
        Value::String(currency_symbol.to_string()),
    );

    if options.currency_policy == CurrencyPolicy::All {
        let currencies: Vec<Value> = record
            .currencies
            .iter()
            .map(|(code, currency)| {
                json!({
                    "code": code,
                    "name": currency.name,
                    "symbol": currency.symbol,
                })
            })
            .collect();
        fields.insert("currencies".into(), Value::Array(currencies));
    }

    let name = non_empty(&record.name.common)
        .or_else(|| first_text(existing, &NAME_FIELDS))
        .unwrap_or_default();
    fields.insert("name_updated".into(), Value::String(name.to_string()));

    fields.insert("flag".into(), Value::String(record.flag.clone()));

    let region = non_empty(&record.region);
    fields.insert(
        "continent_updated".into(),
        text_or_existing(region, existing, &CONTINENT_FALLBACK),
    );
    fields.insert(
        "region".into(),
        text_or_existing(region, existing, &REGION_FALLBACK),
    );
    fields.insert(
        "subregion".into(),
        text_or_existing(non_empty(&record.subregion), existing, &SUBREGION_FALLBACK),
    );

    if let Some(area) = record.area {
        fields.insert("area".into(), Value::from(area));
    }

    fields.insert("unMember".into(), Value::Bool(record.un_member.unwrap_or(false)));

    fields
}

fn non_empty(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

fn text_or_existing(value: Option<&str>, existing: &Map<String, Value>, fallback: &[&str]) -> Value {
    let text = value
        .or_else(|| first_text(existing, fallback))
        .unwrap_or_default();
    Value::String(text.to_string())
}
