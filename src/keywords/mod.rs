//! Keyword extraction core.
//!
//! Pure, synchronous pipeline over a batch of video titles: tokenize, count,
//! optionally filter stopwords, classify into primary/secondary/extended
//! tiers and extract phrase candidates. No I/O, no shared state; every call
//! builds its own frequency table, so concurrent requests are independent.

pub mod classifier;
pub mod frequency;
pub mod phrases;
pub mod stopwords;
pub mod tokenizer;

// Re-export main types
pub use classifier::{classify_tiers, KeywordEntry, KeywordTiers, TierPolicy, TierThresholds};
pub use frequency::FrequencyTable;
pub use phrases::{extract_phrases, PhraseScope, DEFAULT_MAX_PHRASES, DEFAULT_PHRASE_WINDOW};
pub use stopwords::{StopwordFilter, DEFAULT_MIN_TOKEN_LEN};
pub use tokenizer::Tokenizer;

use serde::{Deserialize, Serialize};

/// Configuration for the keyword extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Tiering policy
    pub tier_policy: TierPolicy,

    /// Band size for the top-N policy
    pub top_n: usize,

    /// Count floors for the threshold-band policy
    pub thresholds: TierThresholds,

    /// Remove stopwords and short tokens before classification
    pub use_stopwords: bool,

    /// Minimum token length kept by the stopword filter
    pub min_token_len: usize,

    /// Sliding-window length for phrase candidates
    pub phrase_window: usize,

    /// Whether phrase windows restart at title boundaries
    pub phrase_scope: PhraseScope,

    /// Cap on emitted phrase candidates
    pub max_phrases: usize,

    /// Feed video descriptions into the batch alongside titles
    pub include_descriptions: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tier_policy: TierPolicy::TopN,
            top_n: 10,
            thresholds: TierThresholds::default(),
            use_stopwords: true,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            phrase_window: DEFAULT_PHRASE_WINDOW,
            phrase_scope: PhraseScope::PerUnit,
            max_phrases: DEFAULT_MAX_PHRASES,
            include_descriptions: false,
        }
    }
}

/// Result of one keyword extraction pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordReport {
    /// Classified keyword tiers
    pub tiers: KeywordTiers,

    /// Phrase candidates in encounter order
    pub phrases: Vec<String>,

    /// Tokens extracted across the batch, before filtering
    pub token_count: usize,

    /// Distinct tokens before filtering
    pub distinct_tokens: usize,
}

/// Run the full keyword pipeline over a batch of texts.
///
/// An empty batch (or one where every text tokenizes to nothing) yields an
/// empty report; rejecting such requests is the caller's job.
pub fn classify(texts: &[String], config: &AnalysisConfig) -> KeywordReport {
    let tokenizer = Tokenizer::new();
    let units = tokenizer.tokenize_batch(texts);

    let mut table = FrequencyTable::from_tokens(units.iter().flatten().cloned());
    let token_count = table.total();
    let distinct_tokens = table.len();

    if config.use_stopwords {
        let filter = StopwordFilter::new(config.min_token_len);
        table.retain_content_words(&filter);
    }

    let tiers = classify_tiers(&table, config.tier_policy, config.top_n, config.thresholds);

    // Phrases run over the pre-filter token sequences: stopwords are part of
    // how people phrase titles even when they are not keywords themselves.
    let phrases = extract_phrases(
        &units,
        config.phrase_window,
        config.phrase_scope,
        config.max_phrases,
    );

    KeywordReport {
        tiers,
        phrases,
        token_count,
        distinct_tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_table_total_matches_tokenizer_output() {
        let texts = batch(&["cat dog cat", "dog bird cat", "¡cat!"]);
        let tokenizer = Tokenizer::new();
        let expected: usize = texts.iter().map(|t| tokenizer.tokenize(t).len()).sum();

        let table = FrequencyTable::from_tokens(
            tokenizer.tokenize_batch(&texts).into_iter().flatten(),
        );
        assert_eq!(table.total(), expected);
    }

    #[test]
    fn test_empty_batch_yields_empty_report() {
        let report = classify(&[], &AnalysisConfig::default());
        assert!(report.tiers.is_empty());
        assert!(report.phrases.is_empty());
        assert_eq!(report.token_count, 0);
    }

    #[test]
    fn test_all_punctuation_batch_yields_empty_report() {
        let report = classify(&batch(&["!!!", "---"]), &AnalysisConfig::default());
        assert!(report.tiers.is_empty());
        assert!(report.phrases.is_empty());
    }

    #[test]
    fn test_stopword_scenario() {
        let config = AnalysisConfig {
            tier_policy: TierPolicy::ThresholdBand,
            thresholds: TierThresholds {
                primary_floor: 1,
                secondary_floor: 1,
            },
            ..AnalysisConfig::default()
        };
        let report = classify(&batch(&["the cat is fat"]), &config);
        let classified: Vec<&str> = report
            .tiers
            .primary
            .iter()
            .map(|e| e.token.as_str())
            .collect();
        assert_eq!(classified, vec!["cat", "fat"]);
    }

    #[test]
    fn test_determinism_across_invocations() {
        let texts = batch(&[
            "sourdough starter tutorial",
            "sourdough focaccia basics",
            "starter maintenance routine",
        ]);
        let config = AnalysisConfig::default();
        let a = classify(&texts, &config);
        let b = classify(&texts, &config);

        assert_eq!(format!("{:?}", a.tiers), format!("{:?}", b.tiers));
        assert_eq!(a.phrases, b.phrases);
    }

    #[test]
    fn test_counts_survive_into_tiers() {
        let report = classify(
            &batch(&["cat dog cat", "dog bird cat"]),
            &AnalysisConfig {
                tier_policy: TierPolicy::TopN,
                top_n: 2,
                use_stopwords: false,
                ..AnalysisConfig::default()
            },
        );
        let primary: Vec<(&str, usize)> = report
            .tiers
            .primary
            .iter()
            .map(|e| (e.token.as_str(), e.count))
            .collect();
        assert_eq!(primary, vec![("cat", 3), ("dog", 2)]);
        assert_eq!(report.tiers.secondary[0].token, "bird");
        assert_eq!(report.token_count, 6);
        assert_eq!(report.distinct_tokens, 3);
    }

    #[test]
    fn test_phrases_come_from_prefilter_stream() {
        // "the" is a stopword but still participates in phrasing.
        let report = classify(&batch(&["the perfect loaf"]), &AnalysisConfig::default());
        assert_eq!(report.phrases, vec!["the perfect loaf"]);
    }
}
