/// Divides `numerator` by `denominator`, returning 0.0 when the denominator
/// is not positive.
///
/// Used for every rate in the rubric so that degenerate inputs (zero
/// duration, zero tokens) produce a floor value instead of NaN or infinity.
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// `count` per hundred of `total`, with `total` floored at 1.
pub fn per_hundred(count: usize, total: usize) -> f64 {
    safe_divide(count as f64, total.max(1) as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_safe_divide_regular() {
        assert_relative_eq!(safe_divide(120.0, 2.0), 60.0);
    }

    #[test]
    fn test_safe_divide_zero_denominator_is_zero() {
        assert_relative_eq!(safe_divide(42.0, 0.0), 0.0);
    }

    #[test]
    fn test_safe_divide_negative_denominator_is_zero() {
        assert_relative_eq!(safe_divide(42.0, -3.0), 0.0);
    }

    #[test]
    fn test_safe_divide_nan_denominator_is_zero() {
        assert_relative_eq!(safe_divide(1.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_per_hundred() {
        assert_relative_eq!(per_hundred(3, 50), 6.0);
    }

    #[test]
    fn test_per_hundred_floors_total_at_one() {
        assert_relative_eq!(per_hundred(0, 0), 0.0);
        assert_relative_eq!(per_hundred(2, 0), 200.0);
    }
}
