use thiserror::Error;

use crate::language::domain::grammar_checker::CollaboratorError;

/// Failure of one scoring call. Scoring is all-or-nothing: no partial
/// report accompanies an error.
#[derive(Error, Debug)]
pub enum ScoringError {
    /// The transcript is empty or blank.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("grammar checker failed: {source}")]
    GrammarService {
        #[source]
        source: CollaboratorError,
    },
    #[error("sentiment scorer failed: {source}")]
    SentimentService {
        #[source]
        source: CollaboratorError,
    },
    #[error("transcription failed: {source}")]
    Transcription {
        #[source]
        source: CollaboratorError,
    },
}

impl ScoringError {
    /// True when the caller supplied bad input, as opposed to a collaborator
    /// failing on valid input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ScoringError::InvalidInput(_))
    }

    /// Name of the collaborator that failed, if any.
    pub fn collaborator(&self) -> Option<&'static str> {
        match self {
            ScoringError::InvalidInput(_) => None,
            ScoringError::GrammarService { .. } => Some("grammar"),
            ScoringError::SentimentService { .. } => Some("sentiment"),
            ScoringError::Transcription { .. } => Some("transcription"),
        }
    }
}
