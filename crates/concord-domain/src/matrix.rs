//! Pairwise agreement matrix module
//!
//! Runs the Kappa calculator over every unordered pair of annotators and lays the
//! results out as a symmetric grid plus a flat list in canonical order:
//! increasing `i`, then increasing `j > i`.

use crate::{compute_kappa, AgreementError, KappaValue, LabelSequence};

/// Kappa for one unordered pair of annotators
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseKappaResult {
    /// Index of the first annotator (always the smaller index)
    pub first: usize,

    /// Index of the second annotator
    pub second: usize,

    /// Display label for the pair, e.g. `Worker 1 vs Worker 2`
    pub label: String,

    /// Kappa coefficient or the undefined sentinel
    pub kappa: KappaValue,
}

/// Symmetric N×N Kappa grid with display labels
///
/// Invariants:
/// - `get(i, i)` is exactly 1 for every annotator
/// - `get(i, j) == get(j, i)`
/// - `pairs()` follows [`pair_indices`] order
#[derive(Debug, Clone, PartialEq)]
pub struct AgreementMatrix {
    annotator_labels: Vec<String>,
    values: Vec<Vec<KappaValue>>,
    pairs: Vec<PairwiseKappaResult>,
}

/// Canonical enumeration of unordered pairs for `n` annotators
pub fn pair_indices(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect()
}

/// Build an agreement matrix labelling annotators `Worker 1`, `Worker 2`, ...
pub fn compute_pairwise_agreement(sequences: &[LabelSequence]) -> AgreementMatrix {
    AgreementMatrix::build(sequences, |i| format!("Worker {}", i + 1))
}

impl AgreementMatrix {
    /// Compute Kappa for every pair, naming annotator `i` with `label_for(i)`
    ///
    /// Pairs whose sequences are misaligned or degenerate hold
    /// [`KappaValue::Undefined`]; they never stop the rest of the matrix.
    pub fn build<F>(sequences: &[LabelSequence], label_for: F) -> Self
    where
        F: Fn(usize) -> String,
    {
        let annotator_labels: Vec<String> = (0..sequences.len()).map(label_for).collect();

        let pairs: Vec<PairwiseKappaResult> = pair_indices(sequences.len())
            .into_iter()
            .map(|(i, j)| PairwiseKappaResult {
                first: i,
                second: j,
                label: Self::pair_label(&annotator_labels[i], &annotator_labels[j]),
                kappa: compute_kappa(&sequences[i], &sequences[j]),
            })
            .collect();

        Self::assemble(annotator_labels, pairs)
    }

    /// Assemble a matrix from pair results computed elsewhere
    ///
    /// # Errors
    /// Returns [`AgreementError::PairEnumeration`] unless `pairs` holds exactly one
    /// entry per unordered pair of `annotator_labels`, in canonical order.
    pub fn from_pairs(
        annotator_labels: Vec<String>,
        pairs: Vec<PairwiseKappaResult>,
    ) -> Result<Self, AgreementError> {
        let expected = pair_indices(annotator_labels.len());
        if expected.len() != pairs.len() {
            return Err(AgreementError::PairEnumeration {
                expected: format!("{} pairs", expected.len()),
                actual: format!("{} pairs", pairs.len()),
            });
        }

        for (&(i, j), pair) in expected.iter().zip(&pairs) {
            if (pair.first, pair.second) != (i, j) {
                return Err(AgreementError::PairEnumeration {
                    expected: format!("({}, {})", i, j),
                    actual: format!("({}, {})", pair.first, pair.second),
                });
            }
        }

        Ok(Self::assemble(annotator_labels, pairs))
    }

    fn assemble(annotator_labels: Vec<String>, pairs: Vec<PairwiseKappaResult>) -> Self {
        let n = annotator_labels.len();
        let mut values = vec![vec![KappaValue::Undefined; n]; n];

        for (i, row) in values.iter_mut().enumerate() {
            row[i] = KappaValue::Defined(1.0);
        }
        for pair in &pairs {
            values[pair.first][pair.second] = pair.kappa;
            values[pair.second][pair.first] = pair.kappa;
        }

        Self {
            annotator_labels,
            values,
            pairs,
        }
    }

    /// Display label for a pair of annotators
    pub fn pair_label(first: &str, second: &str) -> String {
        format!("{} vs {}", first, second)
    }

    /// Number of annotators
    pub fn size(&self) -> usize {
        self.annotator_labels.len()
    }

    /// Kappa at `(i, j)`, or `None` if out of bounds
    pub fn get(&self, i: usize, j: usize) -> Option<KappaValue> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Full row for annotator `i`
    pub fn row(&self, i: usize) -> Option<&[KappaValue]> {
        self.values.get(i).map(Vec::as_slice)
    }

    /// The full grid, row-major
    pub fn values(&self) -> &[Vec<KappaValue>] {
        &self.values
    }

    /// Display label per annotator
    pub fn annotator_labels(&self) -> &[String] {
        &self.annotator_labels
    }

    /// Pair results in canonical order
    pub fn pairs(&self) -> &[PairwiseKappaResult] {
        &self.pairs
    }

    /// Pair display labels in canonical order
    pub fn pair_labels(&self) -> Vec<&str> {
        self.pairs.iter().map(|p| p.label.as_str()).collect()
    }

    /// Pair coefficients in canonical order
    pub fn pair_values(&self) -> Vec<KappaValue> {
        self.pairs.iter().map(|p| p.kappa).collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn annotators() -> impl Strategy<Value = Vec<LabelSequence>> {
        (0..6usize, 0..8usize).prop_flat_map(|(n, len)| {
            prop::collection::vec(
                prop::collection::vec(prop::sample::select(vec!["A", "B", "C"]), len)
                    .prop_map(LabelSequence::from),
                n,
            )
        })
    }

    proptest! {
        /// Property: diagonal is 1 and the grid is symmetric
        #[test]
        fn test_matrix_invariants(sequences in annotators()) {
            let matrix = compute_pairwise_agreement(&sequences);
            let n = sequences.len();

            prop_assert_eq!(matrix.size(), n);
            prop_assert_eq!(matrix.pairs().len(), n * n.saturating_sub(1) / 2);

            for i in 0..n {
                prop_assert_eq!(matrix.get(i, i), Some(KappaValue::Defined(1.0)));
                for j in 0..n {
                    prop_assert_eq!(matrix.get(i, j), matrix.get(j, i));
                }
            }
        }

        /// Property: flat pair list mirrors the grid
        #[test]
        fn test_pairs_match_grid(sequences in annotators()) {
            let matrix = compute_pairwise_agreement(&sequences);
            for pair in matrix.pairs() {
                prop_assert!(pair.first < pair.second);
                prop_assert_eq!(matrix.get(pair.first, pair.second), Some(pair.kappa));
                prop_assert_eq!(
                    pair.kappa,
                    compute_kappa(&sequences[pair.first], &sequences[pair.second])
                );
            }
        }
    }
}
