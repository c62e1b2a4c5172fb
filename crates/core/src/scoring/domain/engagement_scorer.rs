use std::ops::Bound::{Excluded, Included, Unbounded};

use serde::Serialize;

use crate::shared::band::{Band, BandTable};

/// Positivity bands (intensity in `[0, 1]`, higher is better).
pub static ENGAGEMENT_BANDS: BandTable = BandTable::new(&[
    Band::new(Included(0.9), Unbounded, 15, "Very engaging"),
    Band::new(Included(0.7), Excluded(0.9), 12, "Engaging"),
    Band::new(Included(0.5), Excluded(0.7), 9, "Pleasant"),
    Band::new(Included(0.3), Excluded(0.5), 6, "Neutral"),
    Band::new(Unbounded, Excluded(0.3), 3, "Flat"),
]);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EngagementResult {
    pub points: u32,
    pub sentiment: f64,
}

pub fn score_engagement(positivity: f64) -> EngagementResult {
    EngagementResult {
        points: ENGAGEMENT_BANDS.classify(positivity).points,
        sentiment: positivity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, 15)]
    #[case(0.9, 15)]
    #[case(0.8999, 12)]
    #[case(0.7, 12)]
    #[case(0.6999, 9)]
    #[case(0.5, 9)]
    #[case(0.4999, 6)]
    #[case(0.3, 6)]
    #[case(0.2999, 3)]
    #[case(0.0, 3)]
    fn test_engagement_bands(#[case] positivity: f64, #[case] points: u32) {
        let result = score_engagement(positivity);
        assert_eq!(result.points, points);
        assert_eq!(result.sentiment, positivity);
    }

    #[test]
    fn test_points_non_decreasing_in_positivity() {
        let mut previous = 0;
        for step in 0..=1000 {
            let points = score_engagement(step as f64 / 1000.0).points;
            assert!(points >= previous, "points fell at step {step}");
            previous = points;
        }
    }

    #[test]
    fn test_max_points_is_fifteen() {
        assert_eq!(ENGAGEMENT_BANDS.max_points(), 15);
    }
}
