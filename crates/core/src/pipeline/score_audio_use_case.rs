use std::path::Path;

use serde::Serialize;

use crate::audio::domain::speech_transcriber::SpeechTranscriber;
use crate::audio::domain::transcription::resolve_duration;
use crate::pipeline::score_transcript_use_case::ScoreTranscriptUseCase;
use crate::pipeline::scoring_error::ScoringError;
use crate::scoring::domain::score_report::ScoreReport;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TranscriptionMeta {
    pub model: String,
    pub segment_count: usize,
}

/// Score of a recording, with the transcript it was derived from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AudioScoreReport {
    pub filename: String,
    pub transcript: String,
    pub transcription_meta: TranscriptionMeta,
    pub duration_sec_used: f64,
    pub score: ScoreReport,
}

/// Transcribes a recording and scores the transcript.
pub struct ScoreAudioUseCase {
    transcriber: Box<dyn SpeechTranscriber>,
    scorer: ScoreTranscriptUseCase,
}

impl ScoreAudioUseCase {
    pub fn new(transcriber: Box<dyn SpeechTranscriber>, scorer: ScoreTranscriptUseCase) -> Self {
        Self {
            transcriber,
            scorer,
        }
    }

    /// `requested_duration` wins when positive; otherwise the duration is
    /// estimated from the transcription's segments.
    pub fn execute(
        &self,
        audio_path: &Path,
        requested_duration: Option<f64>,
    ) -> Result<AudioScoreReport, ScoringError> {
        let transcription = self
            .transcriber
            .transcribe(audio_path)
            .map_err(|source| ScoringError::Transcription { source })?;
        let transcript = transcription.text.trim().to_string();

        let duration = resolve_duration(requested_duration, &transcription);
        log::info!(
            "Transcribed {} ({} segments, model {}); scoring over {duration:.1}s",
            audio_path.display(),
            transcription.segments.len(),
            transcription.model
        );

        let score = self.scorer.score(&transcript, duration)?;

        Ok(AudioScoreReport {
            filename: audio_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            transcript,
            transcription_meta: TranscriptionMeta {
                model: transcription.model,
                segment_count: transcription.segments.len(),
            },
            duration_sec_used: duration,
            score,
        })
    }
}
