/// Domain interface for splitting text into word tokens.
///
/// Implementations must be deterministic and locale-stable so that the same
/// transcript always scores the same.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}
