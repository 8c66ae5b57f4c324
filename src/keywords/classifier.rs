use serde::{Deserialize, Serialize};

use super::frequency::FrequencyTable;

/// Tiering policy applied to the frequency table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TierPolicy {
    /// Rank by count and cut: top N primary, next N secondary, next N extended.
    TopN,
    /// Band by fixed count floors.
    ThresholdBand,
}

/// Count floors for the threshold-band policy.
///
/// `primary_floor` is the smallest count classified primary; `secondary_floor`
/// the smallest classified secondary. Everything with at least one occurrence
/// below `secondary_floor` lands in extended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TierThresholds {
    pub primary_floor: usize,
    pub secondary_floor: usize,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            primary_floor: 5,
            secondary_floor: 2,
        }
    }
}

/// One classified keyword with its observed count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordEntry {
    pub token: String,
    pub count: usize,
}

/// The three keyword tiers. Pairwise disjoint under both policies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordTiers {
    pub primary: Vec<KeywordEntry>,
    pub secondary: Vec<KeywordEntry>,
    pub extended: Vec<KeywordEntry>,
}

impl KeywordTiers {
    /// Total entries across all three tiers.
    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len() + self.extended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty() && self.extended.is_empty()
    }
}

/// Partition the table's distinct tokens into keyword tiers.
///
/// Tokens are ranked by count descending. Equal counts keep their
/// first-occurrence order (stable sort over the table's insertion order), so
/// two runs over the same batch always produce identical tiers.
pub fn classify_tiers(
    table: &FrequencyTable,
    policy: TierPolicy,
    top_n: usize,
    thresholds: TierThresholds,
) -> KeywordTiers {
    let mut ranked: Vec<KeywordEntry> = table
        .entries()
        .map(|(token, count)| KeywordEntry {
            token: token.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    match policy {
        TierPolicy::TopN => top_n_tiers(ranked, top_n),
        TierPolicy::ThresholdBand => threshold_tiers(ranked, thresholds),
    }
}

/// Top-N cut: first N primary, next N secondary, next N extended,
/// remainder dropped.
fn top_n_tiers(ranked: Vec<KeywordEntry>, n: usize) -> KeywordTiers {
    let mut tiers = KeywordTiers::default();
    for (rank, entry) in ranked.into_iter().enumerate() {
        if rank < n {
            tiers.primary.push(entry);
        } else if rank < 2 * n {
            tiers.secondary.push(entry);
        } else if rank < 3 * n {
            tiers.extended.push(entry);
        } else {
            break;
        }
    }
    tiers
}

/// Band by count floors; nothing with count >= 1 is dropped.
fn threshold_tiers(ranked: Vec<KeywordEntry>, thresholds: TierThresholds) -> KeywordTiers {
    let mut tiers = KeywordTiers::default();
    for entry in ranked {
        if entry.count >= thresholds.primary_floor {
            tiers.primary.push(entry);
        } else if entry.count >= thresholds.secondary_floor {
            tiers.secondary.push(entry);
        } else {
            tiers.extended.push(entry);
        }
    }
    tiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn table_from(words: &[&str]) -> FrequencyTable {
        FrequencyTable::from_tokens(words.iter().map(|w| w.to_string()))
    }

    fn tokens(tier: &[KeywordEntry]) -> Vec<&str> {
        tier.iter().map(|e| e.token.as_str()).collect()
    }

    #[test]
    fn test_top_n_scenario() {
        // tokens = [cat, dog, cat, dog, bird, cat]
        let table = table_from(&["cat", "dog", "cat", "dog", "bird", "cat"]);
        let tiers = classify_tiers(&table, TierPolicy::TopN, 2, TierThresholds::default());

        assert_eq!(tokens(&tiers.primary), vec!["cat", "dog"]);
        assert_eq!(tiers.primary[0].count, 3);
        assert_eq!(tiers.primary[1].count, 2);
        assert_eq!(tokens(&tiers.secondary), vec!["bird"]);
        assert!(tiers.extended.is_empty());
    }

    #[test]
    fn test_threshold_band_scenario() {
        let table = table_from(&["cat", "dog", "cat", "dog", "bird", "cat"]);
        let thresholds = TierThresholds {
            primary_floor: 3,
            secondary_floor: 2,
        };
        let tiers = classify_tiers(&table, TierPolicy::ThresholdBand, 10, thresholds);

        assert_eq!(tokens(&tiers.primary), vec!["cat"]);
        assert_eq!(tokens(&tiers.secondary), vec!["dog"]);
        assert_eq!(tokens(&tiers.extended), vec!["bird"]);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        // zebra and apple both occur twice; zebra was seen first.
        let table = table_from(&["zebra", "apple", "zebra", "apple", "mango"]);
        let tiers = classify_tiers(&table, TierPolicy::TopN, 5, TierThresholds::default());
        assert_eq!(tokens(&tiers.primary), vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_tiers_are_pairwise_disjoint_under_both_policies() {
        let table = table_from(&[
            "a1", "a1", "a1", "a1", "a1", "b2", "b2", "b2", "c3", "c3", "d4",
            "e5", "f6", "g7",
        ]);
        for policy in [TierPolicy::TopN, TierPolicy::ThresholdBand] {
            let tiers = classify_tiers(&table, policy, 2, TierThresholds::default());
            let mut seen = HashSet::new();
            for entry in tiers
                .primary
                .iter()
                .chain(&tiers.secondary)
                .chain(&tiers.extended)
            {
                assert!(seen.insert(entry.token.clone()), "{:?} duplicated", entry.token);
            }
        }
    }

    #[test]
    fn test_top_n_drops_beyond_three_bands() {
        let table = table_from(&["a", "b", "c", "d"]);
        let tiers = classify_tiers(&table, TierPolicy::TopN, 1, TierThresholds::default());
        assert_eq!(tiers.len(), 3);
        assert_eq!(tokens(&tiers.primary), vec!["a"]);
        assert_eq!(tokens(&tiers.secondary), vec!["b"]);
        assert_eq!(tokens(&tiers.extended), vec!["c"]);
    }

    #[test]
    fn test_empty_table_yields_empty_tiers() {
        let table = FrequencyTable::default();
        let tiers = classify_tiers(&table, TierPolicy::TopN, 5, TierThresholds::default());
        assert!(tiers.is_empty());
    }

    #[test]
    fn test_every_classified_token_has_positive_count() {
        let table = table_from(&["one", "two", "two"]);
        let tiers = classify_tiers(
            &table,
            TierPolicy::ThresholdBand,
            5,
            TierThresholds::default(),
        );
        for entry in tiers
            .primary
            .iter()
            .chain(&tiers.secondary)
            .chain(&tiers.extended)
        {
            assert!(entry.count >= 1);
        }
    }
}
