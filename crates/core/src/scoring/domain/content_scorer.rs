use serde::Serialize;

use super::keyword_matcher::match_categories;
use crate::shared::constants::{
    GOOD_TO_HAVE_MAX_POINTS, GOOD_TO_HAVE_POINTS_PER_CATEGORY, MUST_HAVE_MAX_POINTS,
    MUST_HAVE_POINTS_PER_CATEGORY,
};
use crate::shared::rubric::PhraseCategory;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContentResult {
    pub points: u32,
    pub found: Vec<String>,
}

/// `matched * per_category`, capped at `max_points`.
pub fn content_points(matched: usize, per_category: u32, max_points: u32) -> u32 {
    let matched = u32::try_from(matched).unwrap_or(u32::MAX);
    matched.saturating_mul(per_category).min(max_points)
}

pub fn score_content(
    lowered_text: &str,
    categories: &[PhraseCategory],
    per_category: u32,
    max_points: u32,
) -> ContentResult {
    let matched = match_categories(lowered_text, categories);
    ContentResult {
        points: content_points(matched.count(), per_category, max_points),
        found: matched.names,
    }
}

pub fn score_must_have(lowered_text: &str, categories: &[PhraseCategory]) -> ContentResult {
    score_content(
        lowered_text,
        categories,
        MUST_HAVE_POINTS_PER_CATEGORY,
        MUST_HAVE_MAX_POINTS,
    )
}

pub fn score_good_to_have(lowered_text: &str, categories: &[PhraseCategory]) -> ContentResult {
    score_content(
        lowered_text,
        categories,
        GOOD_TO_HAVE_POINTS_PER_CATEGORY,
        GOOD_TO_HAVE_MAX_POINTS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::rubric::{GOOD_TO_HAVE, MUST_HAVE};
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 4)]
    #[case(2, 8)]
    #[case(3, 12)]
    #[case(4, 16)]
    #[case(5, 20)]
    #[case(6, 20)]
    #[case(7, 20)]
    fn test_must_have_points_cap(#[case] matched: usize, #[case] expected: u32) {
        assert_eq!(
            content_points(matched, MUST_HAVE_POINTS_PER_CATEGORY, MUST_HAVE_MAX_POINTS),
            expected
        );
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 2)]
    #[case(4, 8)]
    #[case(5, 10)]
    #[case(6, 10)]
    #[case(7, 10)]
    fn test_good_to_have_points_cap(#[case] matched: usize, #[case] expected: u32) {
        assert_eq!(
            content_points(
                matched,
                GOOD_TO_HAVE_POINTS_PER_CATEGORY,
                GOOD_TO_HAVE_MAX_POINTS
            ),
            expected
        );
    }

    #[test]
    fn test_content_points_huge_count_saturates() {
        assert_eq!(content_points(usize::MAX, 4, 20), 20);
    }

    #[test]
    fn test_cap_applies_to_oversized_table() {
        let many: Vec<PhraseCategory> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|n| PhraseCategory::new(*n, &["x"]))
            .collect();
        let result = score_content("x", &many, 4, 20);
        assert_eq!(result.found.len(), 7);
        assert_eq!(result.points, 20);
    }

    #[test]
    fn test_must_have_partial() {
        let result = score_must_have("my name is ravi and i love my family", MUST_HAVE);
        assert_eq!(result.found, vec!["name", "family"]);
        assert_eq!(result.points, 8);
    }

    #[test]
    fn test_good_to_have_none() {
        let result = score_good_to_have("hello", GOOD_TO_HAVE);
        assert!(result.found.is_empty());
        assert_eq!(result.points, 0);
    }

    #[test]
    fn test_good_to_have_all() {
        let text = "let me tell you about my family. i am from goa. my goal is medicine. \
                    fun fact: i juggle. my strength is patience";
        let result = score_good_to_have(text, GOOD_TO_HAVE);
        assert_eq!(result.found.len(), 5);
        assert_eq!(result.points, 10);
    }
}
