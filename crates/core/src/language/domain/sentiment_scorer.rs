use super::grammar_checker::CollaboratorError;

/// Domain interface for sentiment analysis.
pub trait SentimentScorer: Send + Sync {
    /// Positive-affect intensity of `text`, in `[0, 1]`.
    fn positivity(&self, text: &str) -> Result<f64, CollaboratorError>;
}
