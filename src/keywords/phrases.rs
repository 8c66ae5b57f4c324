use serde::{Deserialize, Serialize};

/// Default sliding-window length for phrase candidates.
pub const DEFAULT_PHRASE_WINDOW: usize = 3;

/// Default cap on emitted phrase candidates.
pub const DEFAULT_MAX_PHRASES: usize = 20;

/// Where phrase windows are allowed to run.
///
/// `PerUnit` restarts the window at every title boundary and is the default:
/// a phrase spanning the end of one title and the start of the next is not a
/// phrase anyone typed. `Global` slides over the concatenated token stream
/// of the whole batch, crossing title boundaries, and exists for
/// compatibility with older analyses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PhraseScope {
    PerUnit,
    Global,
}

/// Extract space-joined n-gram phrase candidates from tokenized texts.
///
/// `units` is one token sequence per input text, in input order. A sequence
/// of length L yields up to `L - window + 1` candidates. Windows whose
/// tokens are all identical are skipped. At most `max` candidates are
/// returned.
pub fn extract_phrases(
    units: &[Vec<String>],
    window: usize,
    scope: PhraseScope,
    max: usize,
) -> Vec<String> {
    if window == 0 || max == 0 {
        return Vec::new();
    }

    match scope {
        PhraseScope::PerUnit => units
            .iter()
            .flat_map(|unit| windows_of(unit, window))
            .take(max)
            .collect(),
        PhraseScope::Global => {
            let stream: Vec<String> = units.iter().flatten().cloned().collect();
            windows_of(&stream, window).take(max).collect()
        }
    }
}

/// Sliding windows over one token sequence, degenerate windows excluded.
fn windows_of(tokens: &[String], window: usize) -> impl Iterator<Item = String> + '_ {
    tokens
        .windows(window)
        .filter(|w| !w.iter().all(|t| t == &w[0]))
        .map(|w| w.join(" "))
}
