/// Error type returned by external collaborators (grammar, sentiment, ASR).
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Domain interface for grammar checking.
///
/// Implementations may call a remote service; availability failures are
/// returned, never retried here.
pub trait GrammarChecker: Send + Sync {
    /// Number of grammatical issues detected in `text`.
    fn check(&self, text: &str) -> Result<usize, CollaboratorError>;
}
