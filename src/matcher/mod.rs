// Symptom matching - lexical keyword containment over the corpus

use crate::core::errors::ServiceError;
use crate::core::models::ConditionRecord;
use crate::store::CorpusStore;
use std::sync::Arc;

/// Matches free-text symptom descriptions against the corpus
///
/// A condition matches when any of its keywords, lowercased, appears as a
/// substring of the lowercased input. The direction matters: keyword inside
/// query, never query inside keyword. No ranking, no stemming.
pub struct SymptomMatcher {
    corpus: Arc<CorpusStore>,
}

impl SymptomMatcher {
    pub fn new(corpus: Arc<CorpusStore>) -> Self {
        Self { corpus }
    }

    /// Return all matching conditions, in corpus order
    ///
    /// An empty result is a valid outcome, distinct from the validation
    /// failure on blank input.
    pub fn check(&self, symptoms: &str) -> Result<Vec<ConditionRecord>, ServiceError> {
        if symptoms.trim().is_empty() {
            return Err(ServiceError::Validation("Please enter symptoms.".to_string()));
        }

        let text = symptoms.to_lowercase();

        let matches = self
            .corpus
            .records()
            .iter()
            .filter(|condition| {
                condition
                    .keywords
                    .iter()
                    .any(|keyword| text.contains(&keyword.to_lowercase()))
            })
            .cloned()
            .collect();

        Ok(matches)
    }
}
