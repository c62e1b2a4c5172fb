use std::ops::{Bound, RangeBounds};

/// One row of a threshold table: a value range mapped to points and a label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub lower: Bound<f64>,
    pub upper: Bound<f64>,
    pub points: u32,
    pub label: &'static str,
}

impl Band {
    pub const fn new(lower: Bound<f64>, upper: Bound<f64>, points: u32, label: &'static str) -> Self {
        Self {
            lower,
            upper,
            points,
            label,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.lower, self.upper).contains(&value)
    }
}

/// Ordered threshold table evaluated top to bottom, first match wins.
///
/// A value no band contains (NaN) falls through to the last band, which is
/// always the lowest-quality one in the rubric tables.
#[derive(Debug)]
pub struct BandTable {
    bands: &'static [Band],
}

impl BandTable {
    pub const fn new(bands: &'static [Band]) -> Self {
        assert!(!bands.is_empty(), "band table must not be empty");
        Self { bands }
    }

    pub fn classify(&self, value: f64) -> &'static Band {
        let bands = self.bands;
        bands
            .iter()
            .find(|band| band.contains(value))
            .unwrap_or(&bands[bands.len() - 1])
    }

    pub fn max_points(&self) -> u32 {
        self.bands.iter().map(|b| b.points).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::Bound::{Excluded, Included, Unbounded};

    static TABLE: BandTable = BandTable::new(&[
        Band::new(Included(10.0), Unbounded, 3, "high"),
        Band::new(Included(5.0), Excluded(10.0), 2, "mid"),
        Band::new(Unbounded, Excluded(5.0), 1, "low"),
    ]);

    #[test]
    fn test_classify_first_match_wins() {
        assert_eq!(TABLE.classify(12.0).label, "high");
        assert_eq!(TABLE.classify(7.0).label, "mid");
        assert_eq!(TABLE.classify(-1.0).label, "low");
    }

    #[test]
    fn test_classify_inclusive_and_exclusive_edges() {
        assert_eq!(TABLE.classify(10.0).points, 3);
        assert_eq!(TABLE.classify(9.999).points, 2);
        assert_eq!(TABLE.classify(5.0).points, 2);
        assert_eq!(TABLE.classify(4.999).points, 1);
    }

    #[test]
    fn test_classify_nan_falls_to_last_band() {
        assert_eq!(TABLE.classify(f64::NAN).label, "low");
    }

    #[test]
    fn test_max_points() {
        assert_eq!(TABLE.max_points(), 3);
    }

    #[test]
    fn test_band_contains_unbounded() {
        let band = Band::new(Unbounded, Unbounded, 0, "all");
        assert!(band.contains(f64::MAX));
        assert!(band.contains(f64::MIN));
    }
}
