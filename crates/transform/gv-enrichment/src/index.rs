//! AttributeIndex - O(1) alpha-3 lookup over attribute records.

use ahash::RandomState;
use gv_types::AttributeRecord;
use hashbrown::HashMap;
use tracing::debug;

/// O(1) lookup from uppercase ISO alpha-3 code to a record position.
///
/// Insertion policy is insert-or-overwrite: when two records share a code,
/// the one later in iteration order wins. Records without a code are skipped.
#[derive(Debug, Clone)]
pub struct AttributeIndex {
    /// Maps uppercase alpha-3 code to the position of its record.
    positions: HashMap<String, usize, RandomState>,

    /// Records with a blank code.
    skipped: usize,

    /// Inserts that replaced an earlier record.
    overwritten: usize,
}

impl AttributeIndex {
    /// Builds the index in one pass over `records`.
    pub fn build(records: &[AttributeRecord]) -> Self {
        let mut index = Self {
            positions: HashMap::with_capacity_and_hasher(records.len(), RandomState::new()),
            skipped: 0,
            overwritten: 0,
        };

        for (position, record) in records.iter().enumerate() {
            let code = record.cca3.trim();
            if code.is_empty() {
                index.skipped += 1;
                continue;
            }

            let code = code.to_uppercase();
            if let Some(previous) = index.positions.insert(code.clone(), position) {
                debug!(
                    code = %code,
                    previous = previous,
                    replacement = position,
                    "Duplicate alpha-3 code, later record wins"
                );
                index.overwritten += 1;
            }
        }

        index
    }

    /// Looks up a code (case-insensitive) and returns the record position.
    pub fn position(&self, code: &str) -> Option<usize> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.positions.get(code.to_uppercase().as_str()).copied()
    }

    /// Looks up a code and resolves it against the records the index was built from.
    pub fn get<'r>(&self, code: &str, records: &'r [AttributeRecord]) -> Option<&'r AttributeRecord> {
        self.position(code).and_then(|position| records.get(position))
    }

    /// Returns true if the code is indexed.
    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    /// Returns the number of distinct codes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns how many records had no code.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns how many records were replaced by a later duplicate.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }

    /// Iterates `(code, position)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.positions.iter().map(|(code, position)| (code.as_str(), *position))
    }
}
