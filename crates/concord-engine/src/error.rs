//! Error types for the agreement engine

use concord_domain::AgreementError;
use thiserror::Error;

/// Errors that can occur while running an agreement analysis
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid engine configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Not enough annotators to form a pair
    #[error("Too few annotators: {actual} (min: {min})")]
    TooFewAnnotators {
        /// Annotators supplied
        actual: usize,
        /// Minimum required by configuration
        min: usize,
    },

    /// Strict policy: an annotator's sequence length differs from the first
    #[error("Length mismatch for annotator '{annotator}': {actual} labels (expected {expected})")]
    LengthMismatch {
        /// Display label of the offending annotator
        annotator: String,
        /// Length of the first annotator's sequence
        expected: usize,
        /// Length of the offending sequence
        actual: usize,
    },

    /// Strict policy: an annotator supplied no labels
    #[error("Annotator '{0}' has no labels")]
    EmptySequence(String),

    /// Number of names does not match the number of sequences
    #[error("Got {names} annotator names for {sequences} sequences")]
    NameCountMismatch {
        /// Names supplied
        names: usize,
        /// Sequences supplied
        sequences: usize,
    },

    /// Error from the agreement core
    #[error("Agreement error: {0}")]
    Domain(#[from] AgreementError),
}
