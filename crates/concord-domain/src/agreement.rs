//! Raw agreement calculators
//!
//! Two views of the same count of index-aligned matches:
//! - [`observed_agreement`] is the `po` term of Kappa and rejects unusable input
//! - [`compute_exact_match_rate`] is the reporting metric and falls back to `0.0`

use crate::{AgreementError, LabelSequence};

/// Fraction of item positions where both sequences carry the same label
///
/// # Errors
/// Returns [`AgreementError::LengthMismatch`] when the sequences differ in length
/// and [`AgreementError::Empty`] when both are empty.
pub fn observed_agreement(a: &LabelSequence, b: &LabelSequence) -> Result<f64, AgreementError> {
    if a.len() != b.len() {
        return Err(AgreementError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(AgreementError::Empty);
    }

    let matches = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();
    Ok(matches as f64 / a.len() as f64)
}

/// Literal proportion of index-aligned matches, without chance correction
///
/// Length mismatch or empty input yields `0.0`. This differs from Kappa, which
/// reports such input as undefined: zero matches is a well-defined rate.
pub fn compute_exact_match_rate(a: &LabelSequence, b: &LabelSequence) -> f64 {
    observed_agreement(a, b).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observed_agreement_partial() {
        let a = LabelSequence::from(["A", "B", "A", "A"]);
        let b = LabelSequence::from(["A", "B", "B", "A"]);
        assert_eq!(observed_agreement(&a, &b).unwrap(), 0.75);
    }

    #[test]
    fn test_observed_agreement_length_mismatch() {
        let a = LabelSequence::from(["A", "B"]);
        let b = LabelSequence::from(["A"]);
        assert_eq!(
            observed_agreement(&a, &b),
            Err(AgreementError::LengthMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_observed_agreement_empty() {
        let empty = LabelSequence::default();
        assert_eq!(observed_agreement(&empty, &empty), Err(AgreementError::Empty));
    }

    #[test]
    fn test_exact_match_rate() {
        let a = LabelSequence::from(["A", "B", "A", "A"]);
        let b = LabelSequence::from(["A", "B", "B", "A"]);
        assert_eq!(compute_exact_match_rate(&a, &b), 0.75);
    }

    #[test]
    fn test_exact_match_fallbacks() {
        let a = LabelSequence::from(["A", "B"]);
        let b = LabelSequence::from(["A", "B", "C"]);
        let empty = LabelSequence::default();

        assert_eq!(compute_exact_match_rate(&a, &b), 0.0);
        assert_eq!(compute_exact_match_rate(&empty, &empty), 0.0);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let a = LabelSequence::from(["yes", "no"]);
        let b = LabelSequence::from(["Yes", "no"]);
        assert_eq!(compute_exact_match_rate(&a, &b), 0.5);
    }
}
