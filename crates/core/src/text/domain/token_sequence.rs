use std::collections::HashSet;

use super::tokenizer::Tokenizer;

/// Lowercased word tokens of one transcript, derived once per scoring call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens: tokens.into_iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    pub fn from_text(tokenizer: &dyn Tokenizer, text: &str) -> Self {
        Self::new(tokenizer.tokenize(text))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn distinct_count(&self) -> usize {
        self.tokens.iter().collect::<HashSet<_>>().len()
    }

    /// Number of tokens equal to any of `words`.
    pub fn count_members(&self, words: &[&str]) -> usize {
        self.tokens
            .iter()
            .filter(|t| words.contains(&t.as_str()))
            .count()
    }

    /// Number of positions where `phrase` appears as consecutive tokens.
    pub fn count_phrase(&self, phrase: &[&str]) -> usize {
        if phrase.is_empty() || phrase.len() > self.tokens.len() {
            return 0;
        }
        self.tokens
            .windows(phrase.len())
            .filter(|window| window.iter().zip(phrase).all(|(t, p)| t == p))
            .count()
    }
}
