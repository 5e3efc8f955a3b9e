//! Cohen's Kappa module
//!
//! `κ = (po − pe) / (1 − pe)` where `po` is observed agreement and `pe` is the
//! agreement expected from each annotator's independent label frequencies.

use crate::{observed_agreement, CategoryDistribution, LabelSequence};
use std::fmt;

/// Outcome of a Kappa computation
///
/// `Undefined` marks input for which the statistic has no meaning: misaligned
/// or empty sequences, or a zero chance-correction denominator. Callers must
/// treat it as "not applicable", never as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KappaValue {
    /// A finite coefficient; not clamped to [-1, 1]
    Defined(f64),

    /// No meaningful coefficient exists for this pair
    Undefined,
}

impl KappaValue {
    /// The coefficient, if defined
    pub fn value(&self) -> Option<f64> {
        match self {
            KappaValue::Defined(v) => Some(*v),
            KappaValue::Undefined => None,
        }
    }

    /// Whether a coefficient exists
    pub fn is_defined(&self) -> bool {
        matches!(self, KappaValue::Defined(_))
    }
}

impl From<Option<f64>> for KappaValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(KappaValue::Undefined, KappaValue::Defined)
    }
}

impl fmt::Display for KappaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KappaValue::Defined(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{}", v),
            },
            KappaValue::Undefined => f.write_str("N/A"),
        }
    }
}

/// Compute Cohen's Kappa for two aligned label sequences
///
/// Returns [`KappaValue::Undefined`] when the lengths differ, when the sequences
/// are empty, or when chance agreement is exactly 1 (both annotators used one
/// and the same category throughout).
pub fn compute_kappa(a: &LabelSequence, b: &LabelSequence) -> KappaValue {
    let Ok(po) = observed_agreement(a, b) else {
        return KappaValue::Undefined;
    };

    let pe = CategoryDistribution::from_pair(a, b).expected_agreement();
    if pe == 1.0 {
        return KappaValue::Undefined;
    }

    KappaValue::Defined((po - pe) / (1.0 - pe))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn labels(max_len: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(prop::sample::select(vec!["A", "B", "C", "D"]), 0..max_len)
            .prop_map(|v| v.into_iter().map(String::from).collect())
    }

    proptest! {
        /// Property: Kappa does not depend on argument order
        #[test]
        fn test_kappa_symmetry(a in labels(20), b in labels(20)) {
            let a = LabelSequence::from(a);
            let b = LabelSequence::from(b);
            prop_assert_eq!(compute_kappa(&a, &b), compute_kappa(&b, &a));
        }

        /// Property: a sequence with two or more categories agrees perfectly with itself
        #[test]
        fn test_self_agreement(a in labels(20)) {
            let a = LabelSequence::from(a);
            let distinct = CategoryDistribution::from_pair(&a, &a).category_count();
            let kappa = compute_kappa(&a, &a);
            if distinct >= 2 {
                prop_assert_eq!(kappa, KappaValue::Defined(1.0));
            } else {
                prop_assert_eq!(kappa, KappaValue::Undefined);
            }
        }

        /// Property: Kappa never exceeds 1 and repeated calls are bit-identical
        #[test]
        fn test_kappa_bounded_and_idempotent(
            (a, b) in (1..20usize).prop_flat_map(|n| (
                prop::collection::vec(prop::sample::select(vec!["A", "B", "C"]), n),
                prop::collection::vec(prop::sample::select(vec!["A", "B", "C"]), n),
            ))
        ) {
            let a = LabelSequence::from(a);
            let b = LabelSequence::from(b);
            let first = compute_kappa(&a, &b);
            let second = compute_kappa(&a, &b);

            match (first, second) {
                (KappaValue::Defined(x), KappaValue::Defined(y)) => {
                    prop_assert_eq!(x.to_bits(), y.to_bits());
                    prop_assert!(x <= 1.0 + 1e-12);
                }
                (KappaValue::Undefined, KappaValue::Undefined) => {}
                _ => prop_assert!(false, "results differ between calls"),
            }
        }
    }
}
