use indexmap::IndexMap;

use super::stopwords::StopwordFilter;

/// Occurrence counts for the distinct tokens of one request batch.
///
/// Distinct tokens keep their first-occurrence order, which is what makes
/// the tier classifier's tie-break deterministic. The table is built fresh
/// per batch and never shared across requests.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    /// Build a table from an ordered token stream.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts = IndexMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Total occurrences across all distinct tokens.
    ///
    /// Equals the number of tokens the table was built from.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for a single token, 0 if absent.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Drop stopwords and too-short tokens from the table.
    ///
    /// Filtering is idempotent: a second pass with the same filter removes
    /// nothing further.
    pub fn retain_content_words(&mut self, filter: &StopwordFilter) {
        self.counts.retain(|token, _| filter.is_content_word(token));
    }

    /// Distinct (token, count) pairs in first-occurrence order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(t, c)| (t.as_str(), *c))
    }
}
