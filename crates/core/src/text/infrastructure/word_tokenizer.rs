use regex::Regex;

use crate::text::domain::tokenizer::Tokenizer;

/// Letters or digits, optionally joined by internal apostrophes (`don't`, `i’m`).
const WORD_PATTERN: &str = r"[\p{L}\p{N}]+(?:['’][\p{L}\p{N}]+)*";

/// Regex word tokenizer. Punctuation and whitespace never form tokens.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    pattern: Regex,
}

impl WordTokenizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(WORD_PATTERN)?,
        })
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
