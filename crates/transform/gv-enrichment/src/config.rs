//! Configuration types for the enrichment engine.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Options controlling how matched records are flattened.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnrichmentOptions {
    /// How currencies are emitted.
    #[serde(default)]
    pub currency_policy: CurrencyPolicy,

    /// Year stamped as `population_year`; current UTC year when unset.
    #[serde(default)]
    pub population_year: Option<i32>,
}

impl EnrichmentOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the currency policy.
    pub fn with_currency_policy(mut self, policy: CurrencyPolicy) -> Self {
        self.currency_policy = policy;
        self
    }

    /// Pin the population year instead of using the current year.
    pub fn with_population_year(mut self, year: i32) -> Self {
        self.population_year = Some(year);
        self
    }

    /// Resolves the population year for a run.
    pub fn resolved_population_year(&self) -> i32 {
        self.population_year.unwrap_or_else(|| Utc::now().year())
    }

    /// Validate the options.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(year) = self.population_year {
            if !(1900..=9999).contains(&year) {
                return Err(format!("population_year {year} is not in 1900..=9999"));
            }
        }
        Ok(())
    }
}

/// Currency emission policy.
///
/// `currency_name` and `currency_symbol` always describe the first currency
/// in source order. `All` additionally emits a `currencies` list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPolicy {
    /// Only the first currency.
    #[default]
    First,
    /// First currency plus the full `currencies` list.
    All,
}
