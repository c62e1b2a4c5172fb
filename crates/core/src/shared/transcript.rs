use crate::pipeline::scoring_error::ScoringError;

/// Raw transcript text and the duration of the speech it came from.
///
/// Blank text is rejected at construction. The duration is not validated:
/// non-positive values are a degenerate case the speech-rate scorer floors.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    text: String,
    lowered: String,
    duration_seconds: f64,
}

impl Transcript {
    pub fn new(text: impl Into<String>, duration_seconds: f64) -> Result<Self, ScoringError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ScoringError::InvalidInput(
                "Provide non-empty transcript".to_string(),
            ));
        }
        let lowered = text.to_lowercase();
        Ok(Self {
            text,
            lowered,
            duration_seconds,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased text used for case-insensitive phrase matching.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }
}
