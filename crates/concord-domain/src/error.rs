//! Error types for agreement computations
//!
//! These never escape the public Kappa or exact-match operations; those map them
//! to their fallback values. They are surfaced by the lower-level calculators.

use thiserror::Error;

/// Errors raised by the low-level agreement calculators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgreementError {
    /// The two sequences do not cover the same number of items
    #[error("Length mismatch: {left} vs {right} labels")]
    LengthMismatch {
        /// Length of the left-hand sequence
        left: usize,
        /// Length of the right-hand sequence
        right: usize,
    },

    /// Both sequences are empty
    #[error("Cannot compare empty label sequences")]
    Empty,

    /// Pair results were not supplied in canonical enumeration order
    #[error("Pair enumeration mismatch: expected {expected}, got {actual}")]
    PairEnumeration {
        /// Expected pair, formatted as `(i, j)` or a count
        expected: String,
        /// Pair or count that was supplied
        actual: String,
    },
}
