use regex::Regex;

/// Splits free text into lower-cased word tokens.
///
/// A token is a maximal `[a-z0-9_]+` run of the lower-cased input, so
/// punctuation, emoji and whitespace act as separators and never produce
/// empty tokens. The pattern is ASCII-oriented: words in non-Latin scripts
/// fall outside it and are dropped from the token stream. That mirrors the
/// upstream title data this analyzer was built against and keeps results
/// reproducible across runs.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    word: Regex,
}

impl Tokenizer {
    /// Create a tokenizer with the word pattern compiled once.
    pub fn new() -> Self {
        Self {
            word: Regex::new(r"[a-z0-9_]+").unwrap(),
        }
    }

    /// Tokenize a single text into an ordered sequence of tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Tokenize a batch of texts, one token sequence per text.
    ///
    /// Order is preserved both across texts and within each text.
    pub fn tokenize_batch(&self, texts: &[String]) -> Vec<Vec<String>> {
        texts.iter().map(|t| self.tokenize(t)).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("Top 10 Pasta Recipes - Part 2!");
        assert_eq!(tokens, vec!["top", "10", "pasta", "recipes", "part", "2"]);
    }

    #[test]
    fn test_punctuation_never_yields_empty_tokens() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("...!!! --- ???");
        assert!(tokens.is_empty());

        let tokens = tokenizer.tokenize("a...b");
        assert_eq!(tokens, vec!["a", "b"]);
    }

    #[test]
    fn test_case_folding() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("HELLO World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_underscore_is_a_word_character() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("snake_case title"), vec!["snake_case", "title"]);
    }

    #[test]
    fn test_non_latin_scripts_are_dropped() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("học tiếng Anh - lesson 1");
        // Only the ASCII runs survive; accented fragments split around them.
        assert!(tokens.contains(&"lesson".to_string()));
        assert!(tokens.contains(&"1".to_string()));
        assert!(!tokens.iter().any(|t| t.chars().any(|c| !c.is_ascii())));
    }

    #[test]
    fn test_batch_preserves_per_text_order() {
        let tokenizer = Tokenizer::new();
        let texts = vec!["one two".to_string(), "three".to_string()];
        let batch = tokenizer.tokenize_batch(&texts);
        assert_eq!(batch, vec![vec!["one", "two"], vec!["three"]]);
    }
}
