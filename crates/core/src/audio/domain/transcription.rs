use serde::{Deserialize, Serialize};

use crate::shared::constants::DEFAULT_DURATION_SEC;

/// One timed stretch of recognised speech.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub text: String,
}

/// Output of a speech-to-text run over one recording.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcription {
    pub text: String,
    pub segments: Vec<TranscriptSegment>,
    /// Name of the ASR model that produced the text.
    pub model: String,
}

impl Transcription {
    /// End time of the last segment, if it is positive.
    pub fn estimated_duration(&self) -> Option<f64> {
        self.segments
            .last()
            .map(|s| s.end)
            .filter(|end| *end > 0.0)
    }
}

/// Picks the duration used for scoring a recording.
///
/// The requested duration wins when positive; otherwise the end of the last
/// segment; otherwise [`DEFAULT_DURATION_SEC`].
pub fn resolve_duration(requested: Option<f64>, transcription: &Transcription) -> f64 {
    requested
        .filter(|d| *d > 0.0)
        .or_else(|| transcription.estimated_duration())
        .unwrap_or(DEFAULT_DURATION_SEC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn segment(start: f64, end: f64) -> TranscriptSegment {
        TranscriptSegment {
            start,
            end,
            text: String::new(),
        }
    }

    fn transcription(segments: Vec<TranscriptSegment>) -> Transcription {
        Transcription {
            text: "hello".to_string(),
            segments,
            model: "base".to_string(),
        }
    }

    #[test]
    fn test_estimated_duration_uses_last_segment() {
        let t = transcription(vec![segment(0.0, 3.0), segment(3.0, 47.2)]);
        assert_eq!(t.estimated_duration(), Some(47.2));
    }

    #[test]
    fn test_estimated_duration_none_without_segments() {
        assert_eq!(transcription(vec![]).estimated_duration(), None);
    }

    #[test]
    fn test_estimated_duration_ignores_zero_end() {
        assert_eq!(transcription(vec![segment(0.0, 0.0)]).estimated_duration(), None);
    }

    #[rstest]
    #[case::requested_wins(Some(30.0), vec![segment(0.0, 45.0)], 30.0)]
    #[case::zero_requested_uses_segments(Some(0.0), vec![segment(0.0, 45.0)], 45.0)]
    #[case::negative_requested_uses_segments(Some(-5.0), vec![segment(0.0, 45.0)], 45.0)]
    #[case::missing_requested_uses_segments(None, vec![segment(0.0, 45.0)], 45.0)]
    #[case::nothing_available_defaults(None, vec![], 60.0)]
    #[case::zero_everything_defaults(Some(0.0), vec![segment(0.0, 0.0)], 60.0)]
    fn test_resolve_duration(
        #[case] requested: Option<f64>,
        #[case] segments: Vec<TranscriptSegment>,
        #[case] expected: f64,
    ) {
        let t = transcription(segments);
        assert_relative_eq!(resolve_duration(requested, &t), expected);
    }
}
