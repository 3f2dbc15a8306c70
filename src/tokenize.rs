use crate::normalize::normalize;
use regex::Regex;

/// Extracts the distinct word tokens from rendered page text.
///
/// A token is a maximal `\b\w+\b` run of the lowercased input. Runs
/// that contain no ASCII letter or digit are dropped, so a run of
/// underscores is not a word, while tokens mixing non-ASCII word
/// characters with an ASCII alphanumeric survive.
#[derive(Debug)]
pub struct Tokenizer {
    word: Regex,
    ascii_alnum: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new().expect("Builtin token patterns should be valid")
    }
}

impl Tokenizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            word: Regex::new(r"\b\w+\b")?,
            ascii_alnum: Regex::new(r"[a-zA-Z0-9]")?,
        })
    }

    /// Tokenizes a block of text into a deduplicated, sorted word list.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let tokens = self
            .word
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|token| self.ascii_alnum.is_match(token));
        normalize(tokens)
    }

    /// Combined word set for a page: title and body are tokenized
    /// independently, then merged into one sorted set. Title words and
    /// body words are not distinguished in the output.
    pub fn word_set(&self, title: &str, body: &str) -> Vec<String> {
        let mut words = self.tokenize(title);
        words.extend(self.tokenize(body));
        normalize(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_body_merged() {
        let tokenizer = Tokenizer::default();
        let words = tokenizer.word_set("Hello World", "hello again world!");
        assert_eq!(words, vec!["again", "hello", "world"]);
    }

    #[test]
    fn test_case_folding_and_punctuation() {
        let tokenizer = Tokenizer::default();
        let words = tokenizer.tokenize("Rust, RUST; rust. (Rust!)");
        assert_eq!(words, vec!["rust"]);
    }

    #[test]
    fn test_underscore_only_runs_dropped() {
        let tokenizer = Tokenizer::default();
        let words = tokenizer.tokenize("___ a_b __ x");
        assert_eq!(words, vec!["a_b", "x"]);
    }

    #[test]
    fn test_digits_are_words() {
        let tokenizer = Tokenizer::default();
        let words = tokenizer.tokenize("version 2 of 2");
        assert_eq!(words, vec!["2", "of", "version"]);
    }

    #[test]
    fn test_non_ascii_needs_ascii_alnum() {
        let tokenizer = Tokenizer::default();
        // "naïve" carries ASCII letters and stays; a run of purely
        // non-ASCII word characters does not count as a word.
        let words = tokenizer.tokenize("naïve ïï");
        assert_eq!(words, vec!["naïve"]);
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.word_set("", "").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let tokenizer = Tokenizer::default();
        let text = "The quick brown fox jumps over the lazy dog";
        assert_eq!(tokenizer.tokenize(text), tokenizer.tokenize(text));
    }
}
