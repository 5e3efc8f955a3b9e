//! Concord Engine
//!
//! Application layer over the agreement core. The engine adds what a reporting
//! caller needs on top of the pure calculators:
//! - Configurable length policy (per-pair degradation or fail-fast)
//! - Named annotators
//! - Optional parallel evaluation of pairs
//! - Per-pair exact-match rates and qualitative bands
//! - Run-level summary statistics
//!
//! # Examples
//!
//! ```
//! use concord_domain::LabelSequence;
//! use concord_engine::{AgreementEngine, EngineConfig};
//!
//! let engine = AgreementEngine::new(EngineConfig::strict()).unwrap();
//! let report = engine
//!     .analyze(&[
//!         LabelSequence::from(["yes", "no", "yes"]),
//!         LabelSequence::from(["yes", "no", "no"]),
//!     ])
//!     .unwrap();
//!
//! println!("{}", report.summary_text());
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod report;

pub use config::{EngineConfig, LengthPolicy};
pub use engine::AgreementEngine;
pub use error::EngineError;
pub use report::{AgreementReport, AgreementSummary, PairReport};
