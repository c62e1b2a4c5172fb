use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::audio::domain::speech_transcriber::SpeechTranscriber;
use crate::audio::domain::transcription::{TranscriptSegment, Transcription};
use crate::language::domain::grammar_checker::CollaboratorError;

#[derive(Error, Debug)]
pub enum WhisperJsonError {
    #[error("Whisper transcription not found at: {0}")]
    NotFound(PathBuf),
    #[error("failed to read Whisper transcription {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed Whisper transcription {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct WhisperOutput {
    text: String,
    #[serde(default)]
    segments: Vec<TranscriptSegment>,
}

/// Transcriber that reads the JSON written by a Whisper run
/// (`whisper intro.wav --output_format json`).
///
/// By default the JSON sits next to the recording with a `.json` extension;
/// an explicit path overrides that.
#[derive(Debug)]
pub struct WhisperJsonTranscriber {
    model: String,
    transcription_path: Option<PathBuf>,
}

impl WhisperJsonTranscriber {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
            transcription_path: None,
        }
    }

    pub fn with_transcription_path(mut self, path: &Path) -> Self {
        self.transcription_path = Some(path.to_path_buf());
        self
    }

    /// Location of the JSON consulted for `audio_path`.
    pub fn json_path_for(&self, audio_path: &Path) -> PathBuf {
        self.transcription_path
            .clone()
            .unwrap_or_else(|| audio_path.with_extension("json"))
    }

    fn read(&self, path: &Path) -> Result<Transcription, WhisperJsonError> {
        if !path.exists() {
            return Err(WhisperJsonError::NotFound(path.to_path_buf()));
        }
        let json = fs::read_to_string(path).map_err(|e| WhisperJsonError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let output: WhisperOutput =
            serde_json::from_str(&json).map_err(|e| WhisperJsonError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(Transcription {
            text: output.text.trim().to_string(),
            segments: output.segments,
            model: self.model.clone(),
        })
    }
}

impl SpeechTranscriber for WhisperJsonTranscriber {
    fn transcribe(&self, audio_path: &Path) -> Result<Transcription, CollaboratorError> {
        let path = self.json_path_for(audio_path);
        log::debug!("Reading Whisper transcription from {}", path.display());
        Ok(self.read(&path)?)
    }
}
