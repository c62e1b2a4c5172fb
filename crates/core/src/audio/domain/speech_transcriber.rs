use std::path::Path;

use super::transcription::Transcription;
use crate::language::domain::grammar_checker::CollaboratorError;

/// Domain interface for speech-to-text transcription.
///
/// Implementations produce the recognised text and its timed segments for
/// the recording at `audio_path`.
pub trait SpeechTranscriber: Send + Sync {
    fn transcribe(&self, audio_path: &Path) -> Result<Transcription, CollaboratorError>;
}
