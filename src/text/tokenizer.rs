//! Tokenizer: raw text to an ordered sequence of normalized words

use serde::{Deserialize, Serialize};

/// How raw text is normalized before splitting into words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationPolicy {
    /// Lowercase only; punctuation stays attached to words
    Lowercase,
    /// Lowercase and drop every character that is not an ASCII letter or a space
    #[default]
    LettersOnly,
}

/// Splits text into word tokens. Implementations never yield empty tokens.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Whitespace tokenizer with a configurable normalization policy
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer {
    policy: NormalizationPolicy,
}

impl WordTokenizer {
    /// Create a tokenizer with the given normalization policy
    pub fn new(policy: NormalizationPolicy) -> Self {
        Self { policy }
    }

    /// Tokenizer used for free-form query input (no character stripping)
    pub fn lowercase() -> Self {
        Self::new(NormalizationPolicy::Lowercase)
    }

    /// Tokenizer used for corpus text
    pub fn letters_only() -> Self {
        Self::new(NormalizationPolicy::LettersOnly)
    }

    /// Normalization policy in effect
    pub fn policy(&self) -> NormalizationPolicy {
        self.policy
    }

    fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        match self.policy {
            NormalizationPolicy::Lowercase => lowered,
            // Line breaks separate words, as if the lines were joined with
            // spaces. Any other non-letter, tabs included, is dropped.
            NormalizationPolicy::LettersOnly => lowered
                .chars()
                .filter_map(|c| match c {
                    c if c.is_ascii_alphabetic() || c == ' ' => Some(c),
                    '\n' | '\r' => Some(' '),
                    _ => None,
                })
                .collect(),
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        let tokens = WordTokenizer::lowercase().tokenize("The quick  Brown\tfox");
        assert_eq!(tokens, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_lowercase_keeps_punctuation() {
        let tokens = WordTokenizer::lowercase().tokenize("Hello, World!");
        assert_eq!(tokens, vec!["hello,", "world!"]);
    }

    #[test]
    fn test_letters_only_strips_non_letters() {
        let tokens = WordTokenizer::letters_only().tokenize("Hello, World! It's 2024.");
        assert_eq!(tokens, vec!["hello", "world", "its"]);
    }

    #[test]
    fn test_letters_only_treats_newlines_as_separators() {
        let tokens = WordTokenizer::letters_only().tokenize("end\nof\r\nline");
        assert_eq!(tokens, vec!["end", "of", "line"]);
    }

    #[test]
    fn test_letters_only_drops_tabs_and_other_whitespace() {
        let tokens = WordTokenizer::letters_only().tokenize("alpha\tbeta gamma\u{a0}delta");
        assert_eq!(tokens, vec!["alphabeta", "gammadelta"]);
    }

    #[test]
    fn test_letters_only_drops_tokens_without_letters() {
        let tokens = WordTokenizer::letters_only().tokenize("a 123 -- b");
        assert_eq!(tokens, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(WordTokenizer::letters_only().tokenize("").is_empty());
        assert!(WordTokenizer::lowercase().tokenize("   \n ").is_empty());
        assert!(WordTokenizer::letters_only().tokenize("42 !?").is_empty());
    }

    #[test]
    fn test_default_policy_is_letters_only() {
        assert_eq!(WordTokenizer::default().policy(), NormalizationPolicy::LettersOnly);
    }

    #[test]
    fn test_policy_serializes_snake_case() {
        let json = serde_json::to_string(&NormalizationPolicy::LettersOnly).unwrap();
        assert_eq!(json, "\"letters_only\"");
    }
}
