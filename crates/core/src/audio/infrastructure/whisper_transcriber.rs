use std::path::{Path, PathBuf};

use thiserror::Error;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::domain::speech_transcriber::SpeechTranscriber;
use crate::audio::domain::transcription::{TranscriptSegment, Transcription};
use crate::audio::infrastructure::ffmpeg_audio_decoder::{AudioDecodeError, FfmpegAudioDecoder};
use crate::language::domain::grammar_checker::CollaboratorError;
use crate::shared::constants::WHISPER_SAMPLE_RATE;

#[derive(Error, Debug)]
pub enum WhisperTranscriberError {
    #[error("Whisper model not found at: {0}")]
    ModelNotFound(PathBuf),
    #[error(transparent)]
    Decode(#[from] AudioDecodeError),
    #[error("Whisper inference failed: {0}")]
    Inference(String),
}

/// One decoded Whisper token with its timestamps in centiseconds.
#[derive(Clone, Debug, PartialEq)]
struct TimedToken {
    text: String,
    t0: i64,
    t1: i64,
}

/// In-process speech-to-text using whisper.cpp via whisper-rs.
///
/// The recording is decoded with ffmpeg to 16 kHz mono and transcribed
/// with the ggml model at `model_path`.
#[derive(Debug)]
pub struct WhisperTranscriber {
    model: String,
    model_path: PathBuf,
    decoder: FfmpegAudioDecoder,
}

impl WhisperTranscriber {
    pub fn new(model: &str, model_path: &Path) -> Result<Self, WhisperTranscriberError> {
        if !model_path.exists() {
            return Err(WhisperTranscriberError::ModelNotFound(model_path.to_path_buf()));
        }
        Ok(Self {
            model: model.to_string(),
            model_path: model_path.to_path_buf(),
            decoder: FfmpegAudioDecoder,
        })
    }

    fn recognise(&self, samples: &[f32]) -> Result<Vec<TranscriptSegment>, WhisperTranscriberError> {
        let model_path = self
            .model_path
            .to_str()
            .ok_or_else(|| WhisperTranscriberError::Inference("invalid model path".to_string()))?;
        let ctx = WhisperContext::new_with_params(model_path, WhisperContextParameters::default())
            .map_err(|e| {
                WhisperTranscriberError::Inference(format!("failed to load model: {e}"))
            })?;
        let mut state = ctx.create_state().map_err(|e| {
            WhisperTranscriberError::Inference(format!("failed to create state: {e}"))
        })?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 0 });
        params.set_language(Some("en"));
        params.set_translate(false);
        params.set_token_timestamps(true);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_cpus().min(4) as i32);

        state
            .full(params, samples)
            .map_err(|e| WhisperTranscriberError::Inference(e.to_string()))?;

        let mut segments = Vec::new();
        for seg_idx in 0..state.full_n_segments() {
            let Some(segment) = state.get_segment(seg_idx) else {
                continue;
            };
            let mut tokens = Vec::new();
            for tok_idx in 0..segment.n_tokens() {
                let Some(token) = segment.get_token(tok_idx) else {
                    continue;
                };
                let Ok(text) = token.to_str() else {
                    continue;
                };
                let data = token.token_data();
                tokens.push(TimedToken {
                    text: text.to_string(),
                    t0: data.t0,
                    t1: data.t1,
                });
            }
            segments.extend(segment_from_tokens(&tokens));
        }
        Ok(segments)
    }
}

impl SpeechTranscriber for WhisperTranscriber {
    fn transcribe(&self, audio_path: &Path) -> Result<Transcription, CollaboratorError> {
        let samples = self.decoder.decode_mono(audio_path, WHISPER_SAMPLE_RATE)?;
        let segments = self.recognise(&samples)?;
        log::debug!(
            "Whisper {} produced {} segments for {}",
            self.model,
            segments.len(),
            audio_path.display()
        );
        Ok(Transcription {
            text: join_segments(&segments),
            segments,
            model: self.model.clone(),
        })
    }
}

/// Special tokens render as `[_BEG_]`, `[_TT_150]`, `<|endoftext|>` and so on.
fn is_special(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed.starts_with('[') || trimmed.starts_with('<')
}

/// Builds a segment from its text tokens; `None` when only special tokens remain.
fn segment_from_tokens(tokens: &[TimedToken]) -> Option<TranscriptSegment> {
    let spoken: Vec<&TimedToken> = tokens.iter().filter(|t| !is_special(&t.text)).collect();
    let start = spoken.iter().map(|t| t.t0).min()?;
    let end = spoken.iter().map(|t| t.t1).max()?;
    let text: String = spoken.iter().map(|t| t.text.as_str()).collect();
    Some(TranscriptSegment {
        start: start as f64 / 100.0,
        end: end as f64 / 100.0,
        text: text.trim().to_string(),
    })
}

fn join_segments(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
