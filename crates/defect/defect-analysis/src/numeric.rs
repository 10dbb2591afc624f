//! Small numeric helpers shared across stages.

/// Round to one decimal place.
///
/// Rounds the exact binary value, ties to even, so `0.15` (stored just below
/// the tie) becomes `0.1` and the exact tie `2.25` becomes `2.2`.
pub fn round1(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Clamp negative projections to zero. NaN also maps to zero.
pub fn non_negative(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(2.34), 2.3);
        assert_eq!(round1(2.36), 2.4);
        assert_eq!(round1(-1.26), -1.3);
        assert_eq!(round1(7.0), 7.0);
    }

    #[test]
    fn test_round1_ties_use_exact_value() {
        assert_eq!(round1(0.15), 0.1);
        assert_eq!(round1(0.225), 0.2);
        assert_eq!(round1(2.25), 2.2);
        assert_eq!(round1(52.25), 52.2);
        assert_eq!(round1(0.35), 0.3);
        assert_eq!(round1(0.75), 0.8);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative(-0.5), 0.0);
        assert_eq!(non_negative(f64::NAN), 0.0);
        assert_eq!(non_negative(3.2), 3.2);
    }
}
