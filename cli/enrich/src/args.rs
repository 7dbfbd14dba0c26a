//! CLI argument definitions for gv-enrich.

use clap::{Parser, ValueEnum};
pub use gv_cli_common::LogLevel;
use gv_enrichment::CurrencyPolicy;
use std::path::PathBuf;

/// Published country attributes dataset.
pub const DEFAULT_DATA_SOURCE: &str =
    "https://raw.githubusercontent.com/texao/geoview_countries/main/countries.json";

/// Enrich a GeoJSON country collection with country attributes.
///
/// Each feature is matched to an attribute record by ISO alpha-3 code, then
/// by accent- and case-insensitive name. Matched features get population,
/// capital, languages, currency, flag and region fields; unmatched features
/// pass through unchanged.
///
/// ## Examples
///
/// Enrich a local borders file against the published dataset:
///   gv-enrich --geojson borders.geojson -o countries_enriched.geojson
///
/// Offline run with a pinned population year:
///   gv-enrich --geojson borders.geojson --data countries.json --population-year 2024 --pretty
#[derive(Parser, Debug)]
#[command(name = "gv-enrich")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Inputs ===
    /// GeoJSON FeatureCollection (path or http(s) URL)
    #[arg(short = 'g', long, env = "GV_GEOJSON_SOURCE")]
    pub geojson: String,

    /// Country attributes dataset (path or http(s) URL)
    #[arg(short = 'D', long, env = "GV_DATA_SOURCE", default_value = DEFAULT_DATA_SOURCE)]
    pub data: String,

    // === Output ===
    /// Output file (stdout when omitted or "-")
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the output document
    #[arg(long)]
    pub pretty: bool,

    /// Enrich and report without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with code 4 when any feature is left unmatched
    #[arg(long)]
    pub fail_on_unmatched: bool,

    // === Enrichment ===
    /// How currencies are emitted
    #[arg(long, value_enum, default_value = "first")]
    pub currency_policy: CurrencyPolicyArg,

    /// Year stamped as population_year (defaults to the current year)
    #[arg(long, value_parser = clap::value_parser!(i32).range(1900..=9999))]
    pub population_year: Option<i32>,

    // === Fetching ===
    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Maximum retries for transient HTTP failures
    #[arg(long, default_value = "3")]
    pub max_retries: u32,

    // === Logging ===
    /// Log level
    #[arg(short = 'l', long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Currency policy argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CurrencyPolicyArg {
    /// Only the first currency
    First,
    /// First currency plus the full `currencies` list
    All,
}

impl From<CurrencyPolicyArg> for CurrencyPolicy {
    fn from(arg: CurrencyPolicyArg) -> Self {
        match arg {
            CurrencyPolicyArg::First => CurrencyPolicy::First,
            CurrencyPolicyArg::All => CurrencyPolicy::All,
        }
    }
}
