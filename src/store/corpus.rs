// Condition corpus - loaded once, read-only for the process lifetime

use crate::core::models::ConditionRecord;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Immutable collection of condition records
///
/// Loaded from a JSON array at startup. Iteration order is file order, which
/// is the order matches are returned in.
pub struct CorpusStore {
    records: Vec<ConditionRecord>,
}

impl CorpusStore {
    /// Load the corpus from `path`
    ///
    /// A missing or unparseable file yields an empty corpus (the matcher then
    /// returns no matches) instead of failing startup. Records with an empty
    /// keyword set can never match and are dropped here.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        let parsed: Vec<ConditionRecord> = match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!(path = ?path, error = %e, "Corpus file unparseable, starting with empty corpus");
                    Vec::new()
                }
            },
            Err(e) => {
                warn!(path = ?path, error = %e, "Corpus file missing, starting with empty corpus");
                Vec::new()
            }
        };

        let store = Self::from_records(parsed);
        info!(path = ?path, count = store.len(), "Corpus loaded");
        store
    }

    /// Build a corpus from in-memory records, dropping keyword-less entries
    pub fn from_records(records: Vec<ConditionRecord>) -> Self {
        let records = records
            .into_iter()
            .filter(|r| {
                if r.keywords.is_empty() {
                    warn!(condition = %r.name, "Dropping condition without keywords");
                    false
                } else {
                    true
                }
            })
            .collect();
        Self { records }
    }

    /// All records, in load order
    pub fn records(&self) -> &[ConditionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
