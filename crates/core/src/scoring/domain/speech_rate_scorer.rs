use std::ops::Bound::{Excluded, Included, Unbounded};

use serde::Serialize;

use crate::shared::band::{Band, BandTable};
use crate::shared::constants::SECONDS_PER_MINUTE;
use crate::shared::ratio::safe_divide;

/// Words-per-minute bands. Contiguous: every rate falls in exactly one band.
pub static SPEECH_RATE_BANDS: BandTable = BandTable::new(&[
    Band::new(Excluded(161.0), Unbounded, 2, "Too fast"),
    Band::new(Included(141.0), Included(161.0), 6, "Fast"),
    Band::new(Included(111.0), Excluded(141.0), 10, "Ideal"),
    Band::new(Included(81.0), Excluded(111.0), 6, "Slow"),
    Band::new(Unbounded, Excluded(81.0), 2, "Too slow"),
]);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpeechRateResult {
    pub points: u32,
    pub detail: String,
    pub wpm: f64,
}

/// Words per minute; 0.0 when the duration is not positive.
pub fn words_per_minute(word_count: usize, duration_seconds: f64) -> f64 {
    safe_divide(word_count as f64, duration_seconds / SECONDS_PER_MINUTE)
}

pub fn score_speech_rate(wpm: f64) -> SpeechRateResult {
    let band = SPEECH_RATE_BANDS.classify(wpm);
    SpeechRateResult {
        points: band.points,
        detail: format!("{} {:.1}", band.label, wpm),
        wpm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_words_per_minute() {
        assert_relative_eq!(words_per_minute(120, 60.0), 120.0);
        assert_relative_eq!(words_per_minute(60, 30.0), 120.0);
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-12.0)]
    fn test_words_per_minute_degenerate_duration(#[case] duration: f64) {
        assert_relative_eq!(words_per_minute(100, duration), 0.0);
    }

    #[rstest]
    #[case::far_too_fast(220.0, 2, "Too fast")]
    #[case::just_above_161(161.01, 2, "Too fast")]
    #[case::at_161(161.0, 6, "Fast")]
    #[case::between_160_161(160.5, 6, "Fast")]
    #[case::at_141(141.0, 6, "Fast")]
    #[case::just_below_141(140.99, 10, "Ideal")]
    #[case::between_140_141(140.5, 10, "Ideal")]
    #[case::ideal(125.0, 10, "Ideal")]
    #[case::at_111(111.0, 10, "Ideal")]
    #[case::just_below_111(110.99, 6, "Slow")]
    #[case::at_81(81.0, 6, "Slow")]
    #[case::just_below_81(80.99, 2, "Too slow")]
    #[case::zero(0.0, 2, "Too slow")]
    fn test_speech_rate_bands(#[case] wpm: f64, #[case] points: u32, #[case] label: &str) {
        let result = score_speech_rate(wpm);
        assert_eq!(result.points, points);
        assert!(
            result.detail.starts_with(label),
            "Expected '{label}' for {wpm}, got '{}'",
            result.detail
        );
    }

    #[test]
    fn test_detail_has_one_decimal() {
        assert_eq!(score_speech_rate(123.456).detail, "Ideal 123.5");
    }

    #[test]
    fn test_zero_duration_is_too_slow() {
        let result = score_speech_rate(words_per_minute(50, 0.0));
        assert_eq!(result.points, 2);
        assert_eq!(result.detail, "Too slow 0.0");
    }

    #[test]
    fn test_points_rise_then_fall() {
        let mut previous = score_speech_rate(0.0).points;
        let mut wpm = 0.0;
        while wpm <= 300.0 {
            let points = score_speech_rate(wpm).points;
            if wpm < 111.0 {
                assert!(points >= previous, "points fell at {wpm}");
            } else if wpm < 141.0 {
                assert_eq!(points, 10, "ideal band broken at {wpm}");
            } else {
                assert!(points <= previous, "points rose at {wpm}");
            }
            previous = points;
            wpm += 0.25;
        }
    }

    #[test]
    fn test_max_points_is_ten() {
        assert_eq!(SPEECH_RATE_BANDS.max_points(), 10);
    }
}
