//! Concord Domain Layer
//!
//! This crate contains the inter-annotator agreement core. Every operation is a
//! pure function of its inputs: no I/O, no logging, no shared state.
//!
//! ## Key Concepts
//!
//! - **LabelSequence**: One annotator's labels, aligned by item index
//! - **Observed agreement**: Raw fraction of matching labels between two sequences
//! - **Category distribution**: Per-sequence marginal frequency of each label
//! - **Kappa**: Cohen's chance-corrected agreement, or an undefined sentinel
//! - **Agreement matrix**: Symmetric pairwise Kappa grid over N annotators
//! - **Qualitative band**: Landis & Koch reading of a Kappa value
//!
//! ## Degenerate input
//!
//! Nothing in this crate panics or aborts on malformed label data. Kappa degrades
//! to [`KappaValue::Undefined`], the exact-match rate degrades to `0.0`, and the
//! interpreter maps the sentinel to [`QualitativeBand::NotApplicable`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod agreement;
pub mod band;
pub mod distribution;
pub mod error;
pub mod kappa;
pub mod label;
pub mod matrix;

// Re-exports for convenience
pub use agreement::{compute_exact_match_rate, observed_agreement};
pub use band::{interpret_kappa, QualitativeBand};
pub use distribution::CategoryDistribution;
pub use error::AgreementError;
pub use kappa::{compute_kappa, KappaValue};
pub use label::LabelSequence;
pub use matrix::{
    compute_pairwise_agreement, pair_indices, AgreementMatrix, PairwiseKappaResult,
};
