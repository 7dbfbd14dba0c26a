//! Enricher - runs match, map and merge over a feature list.

use crate::{
    map_fields, stamp, AttributeIndex, EnrichmentOptions, FieldOptions, MatchMethod, MatchOutcome,
    Matcher,
};
use gv_types::{AttributeRecord, Feature, FeatureCollection, SourceIds};
use serde::Serialize;
use serde_json::Map;
use tracing::{debug, info};

/// Owns the attribute records and their index for the duration of a run.
///
/// Records and index are immutable once built; every [`enrich`](Self::enrich)
/// call keeps its own counters.
#[derive(Debug)]
pub struct Enricher {
    records: Vec<AttributeRecord>,
    index: AttributeIndex,
    options: EnrichmentOptions,
}

impl Enricher {
    /// Builds the index over `records`.
    pub fn new(records: Vec<AttributeRecord>, options: EnrichmentOptions) -> Self {
        let index = AttributeIndex::build(&records);

        info!(
            records = records.len(),
            indexed = index.len(),
            skipped = index.skipped(),
            overwritten = index.overwritten(),
            "Built attribute index"
        );

        Self {
            records,
            index,
            options,
        }
    }

    pub fn records(&self) -> &[AttributeRecord] {
        &self.records
    }

    pub fn index(&self) -> &AttributeIndex {
        &self.index
    }

    pub fn options(&self) -> &EnrichmentOptions {
        &self.options
    }

    /// Returns a matcher over this enricher's records.
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.index, &self.records)
    }

    /// Enriches every feature in order.
    ///
    /// Matched features get the mapped fields merged into their property bag
    /// (key-wise overwrite). Unmatched features are returned untouched. The
    /// output has the same length and order as the input.
    pub fn enrich(&self, features: Vec<Feature>) -> Enriched {
        let matcher = self.matcher();
        let field_options = FieldOptions {
            population_year: self.options.resolved_population_year(),
            currency_policy: self.options.currency_policy,
        };

        let mut report = EnrichmentReport::new(features.len());
        let mut enriched = Vec::with_capacity(features.len());

        for (position, mut feature) in features.into_iter().enumerate() {
            let identity = feature.identity();
            let outcome = matcher.find(&identity);

            match (outcome.record(), outcome.method()) {
                (Some(record), Some(method)) => {
                    let properties = feature.properties.get_or_insert_with(Map::new);
                    let fields = map_fields(record, properties, &field_options);
                    properties.extend(fields);

                    debug!(
                        position = position,
                        code = ?identity.code,
                        name = ?identity.name,
                        matched = %record.cca3,
                        method = ?method,
                        "Enriched feature"
                    );
                    report.record_match(method);
                }
                _ => {
                    debug!(
                        position = position,
                        code = ?identity.code,
                        name = ?identity.name,
                        "No attribute record for feature"
                    );
                    report.record_miss(UnmatchedFeature {
                        position,
                        code: identity.code,
                        name: identity.name,
                    });
                }
            }

            enriched.push(feature);
        }

        info!(
            total = report.total,
            enriched = report.enriched,
            by_code = report.by_code,
            by_name = report.by_name,
            unmatched = report.unmatched.len(),
            "Enrichment complete"
        );

        Enriched {
            features: enriched,
            report,
        }
    }

    /// Enriches a whole collection and attaches its provenance block.
    pub fn enrich_collection(
        &self,
        mut collection: FeatureCollection,
        sources: &SourceIds,
    ) -> (FeatureCollection, EnrichmentReport) {
        let features = std::mem::take(&mut collection.features);
        let Enriched { features, report } = self.enrich(features);

        collection.features = features;
        collection.attach_metadata(stamp(report.enriched, report.total, sources));

        (collection, report)
    }

    /// Matches one feature without modifying it.
    pub fn lookup<'a>(&'a self, feature: &Feature) -> MatchOutcome<'a> {
        self.matcher().find(&feature.identity())
    }
}

/// Features after enrichment, with the run's counters.
#[derive(Debug, Clone)]
pub struct Enriched {
    pub features: Vec<Feature>,
    pub report: EnrichmentReport,
}

/// Coverage counters for one enrichment run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnrichmentReport {
    /// Features processed
    pub total: usize,
    /// Features that received attributes
    pub enriched: usize,
    /// Matched by alpha-3 code
    pub by_code: usize,
    /// Matched by normalized name
    pub by_name: usize,
    /// Features left untouched
    pub unmatched: Vec<UnmatchedFeature>,
}

impl EnrichmentReport {
    fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    fn record_match(&mut self, method: MatchMethod) {
        self.enriched += 1;
        match method {
            MatchMethod::Code => self.by_code += 1,
            MatchMethod::Name => self.by_name += 1,
        }
    }

    fn record_miss(&mut self, feature: UnmatchedFeature) {
        self.unmatched.push(feature);
    }

    /// Fraction of features enriched, 0.0 for an empty run.
    pub fn coverage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.enriched as f64 / self.total as f64
        }
    }

    /// Returns true if every feature was enriched.
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// A feature no record matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedFeature {
    /// Position in the input collection
    pub position: usize,
    /// Code the feature carried, if usable
    pub code: Option<String>,
    /// Name the feature carried, if any
    pub name: Option<String>,
}
