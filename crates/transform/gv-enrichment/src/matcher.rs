//! Matcher - finds the attribute record for a feature.
//!
//! Two tiers: an O(1) alpha-3 lookup, then a linear scan comparing the
//! normalized feature name with each record's normalized common and official
//! names. Misses are expected to be rare (territories, disputed areas), so the
//! scan is not indexed further.

use crate::{normalize_name, AttributeIndex};
use gv_types::{AttributeRecord, FeatureIdentity};

/// How a record was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMethod {
    /// Alpha-3 code lookup
    Code,
    /// Normalized name equality
    Name,
}

/// Result of matching one feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchOutcome<'r> {
    /// Record found by alpha-3 code
    ByCode(&'r AttributeRecord),
    /// Record found by normalized name
    ByName(&'r AttributeRecord),
    /// Neither tier matched
    NotFound,
}

impl<'r> MatchOutcome<'r> {
    /// Returns the matched record, if any.
    pub fn record(&self) -> Option<&'r AttributeRecord> {
        match self {
            Self::ByCode(record) | Self::ByName(record) => Some(record),
            Self::NotFound => None,
        }
    }

    /// Returns how the record was found, if it was.
    pub fn method(&self) -> Option<MatchMethod> {
        match self {
            Self::ByCode(_) => Some(MatchMethod::Code),
            Self::ByName(_) => Some(MatchMethod::Name),
            Self::NotFound => None,
        }
    }

    /// True for either kind of match.
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

/// Normalized names of one record, computed once per matcher.
#[derive(Debug, Clone)]
struct NameKeys {
    common: String,
    official: String,
}

impl NameKeys {
    fn of(record: &AttributeRecord) -> Self {
        Self {
            common: normalize_name(record.name.common.trim()),
            official: normalize_name(record.name.official.trim()),
        }
    }

    fn matches(&self, key: &str) -> bool {
        (!self.common.is_empty() && self.common == key)
            || (!self.official.is_empty() && self.official == key)
    }
}

/// Matches feature identities against a record collection.
///
/// Borrows the index and records; both stay immutable for the matcher's life.
#[derive(Debug)]
pub struct Matcher<'r> {
    index: &'r AttributeIndex,
    records: &'r [AttributeRecord],
    names: Vec<NameKeys>,
}

impl<'r> Matcher<'r> {
    /// Creates a matcher over `records`, which must be the slice `index` was built from.
    pub fn new(index: &'r AttributeIndex, records: &'r [AttributeRecord]) -> Self {
        Self {
            index,
            records,
            names: records.iter().map(NameKeys::of).collect(),
        }
    }

    /// Finds the record for one feature.
    pub fn find(&self, identity: &FeatureIdentity) -> MatchOutcome<'r> {
        if let Some(record) = identity
            .code
            .as_deref()
            .and_then(|code| self.index.get(code, self.records))
        {
            return MatchOutcome::ByCode(record);
        }

        match identity.name.as_deref().and_then(|name| self.find_by_name(name)) {
            Some(record) => MatchOutcome::ByName(record),
            None => MatchOutcome::NotFound,
        }
    }

    /// Scans records in dataset order for the first normalized-name match.
    pub fn find_by_name(&self, name: &str) -> Option<&'r AttributeRecord> {
        let key = normalize_name(name.trim());
        if key.is_empty() {
            return None;
        }

        let records = self.records;
        self.names
            .iter()
            .position(|names| names.matches(&key))
            .map(|position| &records[position])
    }
}
