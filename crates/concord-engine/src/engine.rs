//! Core engine: validation, pair evaluation, and report assembly

use crate::{AgreementReport, EngineConfig, EngineError, LengthPolicy};
use concord_domain::{
    compute_exact_match_rate, compute_kappa, pair_indices, AgreementMatrix, LabelSequence,
    PairwiseKappaResult,
};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Runs agreement analyses over N annotators
///
/// # Examples
///
/// ```
/// use concord_domain::LabelSequence;
/// use concord_engine::{AgreementEngine, EngineConfig};
///
/// let engine = AgreementEngine::new(EngineConfig::default()).unwrap();
/// let report = engine
///     .analyze(&[
///         LabelSequence::from(["A", "B", "A", "A"]),
///         LabelSequence::from(["A", "B", "B", "A"]),
///     ])
///     .unwrap();
///
/// assert_eq!(report.pairs()[0].band.as_str(), "Moderate");
/// ```
#[derive(Debug, Clone)]
pub struct AgreementEngine {
    config: EngineConfig,
}

impl AgreementEngine {
    /// Create a new engine with the given configuration
    ///
    /// # Errors
    /// Returns [`EngineError::Config`] if the configuration fails validation.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::Config)?;
        Ok(Self { config })
    }

    /// Create an engine with default configuration
    pub fn default_config() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze sequences, labelling annotators with the configured prefix
    pub fn analyze(&self, sequences: &[LabelSequence]) -> Result<AgreementReport, EngineError> {
        let names: Vec<String> = (0..sequences.len())
            .map(|i| self.config.annotator_label(i))
            .collect();
        self.run(names, sequences)
    }

    /// Analyze sequences with explicit annotator names
    ///
    /// # Errors
    /// Returns [`EngineError::NameCountMismatch`] if `names` and `sequences`
    /// differ in length, plus any error [`AgreementEngine::analyze`] can return.
    pub fn analyze_named(
        &self,
        names: &[String],
        sequences: &[LabelSequence],
    ) -> Result<AgreementReport, EngineError> {
        if names.len() != sequences.len() {
            return Err(EngineError::NameCountMismatch {
                names: names.len(),
                sequences: sequences.len(),
            });
        }
        self.run(names.to_vec(), sequences)
    }

    fn run(
        &self,
        names: Vec<String>,
        sequences: &[LabelSequence],
    ) -> Result<AgreementReport, EngineError> {
        if sequences.len() < self.config.min_annotators {
            return Err(EngineError::TooFewAnnotators {
                actual: sequences.len(),
                min: self.config.min_annotators,
            });
        }

        if self.config.length_policy == LengthPolicy::Strict {
            check_lengths(&names, sequences)?;
        }

        let indices = pair_indices(sequences.len());
        let parallel = self.config.parallel && indices.len() >= self.config.parallel_min_pairs;

        info!(
            annotators = sequences.len(),
            pairs = indices.len(),
            parallel,
            "Starting agreement analysis"
        );

        let evaluate = |&(i, j): &(usize, usize)| evaluate_pair(&names, sequences, i, j);
        let evaluated: Vec<(PairwiseKappaResult, f64)> = if parallel {
            indices.par_iter().map(evaluate).collect()
        } else {
            indices.iter().map(evaluate).collect()
        };

        let (pairs, exact_matches): (Vec<_>, Vec<_>) = evaluated.into_iter().unzip();
        let matrix = AgreementMatrix::from_pairs(names, pairs)?;
        let report = AgreementReport::new(matrix, &exact_matches)?;

        let summary = report.summary();
        info!(
            defined = summary.defined_pairs,
            undefined = summary.undefined_pairs,
            mean_kappa = ?summary.mean_kappa,
            "Agreement analysis complete"
        );

        Ok(report)
    }
}

fn evaluate_pair(
    names: &[String],
    sequences: &[LabelSequence],
    i: usize,
    j: usize,
) -> (PairwiseKappaResult, f64) {
    let label = AgreementMatrix::pair_label(&names[i], &names[j]);
    let kappa = compute_kappa(&sequences[i], &sequences[j]);
    let exact = compute_exact_match_rate(&sequences[i], &sequences[j]);

    if kappa.is_defined() {
        debug!(pair = %label, kappa = %kappa, exact, "Evaluated pair");
    } else {
        warn!(
            pair = %label,
            left_len = sequences[i].len(),
            right_len = sequences[j].len(),
            "Kappa undefined for pair"
        );
    }

    (
        PairwiseKappaResult {
            first: i,
            second: j,
            label,
            kappa,
        },
        exact,
    )
}

fn check_lengths(names: &[String], sequences: &[LabelSequence]) -> Result<(), EngineError> {
    let Some(first) = sequences.first() else {
        return Ok(());
    };
    let expected = first.len();

    for (name, seq) in names.iter().zip(sequences) {
        if seq.is_empty() {
            return Err(EngineError::EmptySequence(name.clone()));
        }
        if seq.len() != expected {
            return Err(EngineError::LengthMismatch {
                annotator: name.clone(),
                expected,
                actual: seq.len(),
            });
        }
    }
    Ok(())
}
