//! Agreement report: the matrix plus per-pair and run-level statistics

use concord_domain::{
    interpret_kappa, AgreementError, AgreementMatrix, KappaValue, QualitativeBand,
};

/// Per-pair view combining Kappa, its band, and the exact-match rate
#[derive(Debug, Clone, PartialEq)]
pub struct PairReport {
    /// Index of the first annotator
    pub first: usize,

    /// Index of the second annotator
    pub second: usize,

    /// Pair display label
    pub label: String,

    /// Kappa coefficient or undefined sentinel
    pub kappa: KappaValue,

    /// Qualitative reading of `kappa`
    pub band: QualitativeBand,

    /// Literal proportion of matching labels
    pub exact_match: f64,
}

/// Run-level statistics over all pairs
///
/// Kappa statistics only consider defined pairs; they are `None` when no pair
/// produced a coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct AgreementSummary {
    /// Number of annotators
    pub annotators: usize,

    /// Number of unordered pairs
    pub pairs: usize,

    /// Pairs with a defined Kappa
    pub defined_pairs: usize,

    /// Pairs whose Kappa is undefined
    pub undefined_pairs: usize,

    /// Mean Kappa over defined pairs
    pub mean_kappa: Option<f64>,

    /// Lowest defined Kappa
    pub min_kappa: Option<f64>,

    /// Highest defined Kappa
    pub max_kappa: Option<f64>,

    /// Band of the mean Kappa
    pub mean_band: QualitativeBand,

    /// Mean exact-match rate over all pairs
    pub mean_exact_match: Option<f64>,
}

impl AgreementSummary {
    fn from_pairs(annotators: usize, pairs: &[PairReport]) -> Self {
        let defined: Vec<f64> = pairs.iter().filter_map(|p| p.kappa.value()).collect();

        let mean_kappa = mean(&defined);
        let min_kappa = defined.iter().copied().reduce(f64::min);
        let max_kappa = defined.iter().copied().reduce(f64::max);

        let exact: Vec<f64> = pairs.iter().map(|p| p.exact_match).collect();

        Self {
            annotators,
            pairs: pairs.len(),
            defined_pairs: defined.len(),
            undefined_pairs: pairs.len() - defined.len(),
            mean_kappa,
            min_kappa,
            max_kappa,
            mean_band: interpret_kappa(KappaValue::from(mean_kappa)),
            mean_exact_match: mean(&exact),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Full result of an agreement analysis
#[derive(Debug, Clone, PartialEq)]
pub struct AgreementReport {
    matrix: AgreementMatrix,
    pairs: Vec<PairReport>,
    summary: AgreementSummary,
}

impl AgreementReport {
    /// Build a report from a matrix and exact-match rates in pair order
    ///
    /// There must be exactly one rate per pair.
    pub(crate) fn new(
        matrix: AgreementMatrix,
        exact_matches: &[f64],
    ) -> Result<Self, AgreementError> {
        if exact_matches.len() != matrix.pairs().len() {
            return Err(AgreementError::PairEnumeration {
                expected: format!("{} exact-match rates", matrix.pairs().len()),
                actual: format!("{} exact-match rates", exact_matches.len()),
            });
        }

        let pairs: Vec<PairReport> = matrix
            .pairs()
            .iter()
            .zip(exact_matches)
            .map(|(pair, &exact_match)| PairReport {
                first: pair.first,
                second: pair.second,
                label: pair.label.clone(),
                kappa: pair.kappa,
                band: interpret_kappa(pair.kappa),
                exact_match,
            })
            .collect();

        let summary = AgreementSummary::from_pairs(matrix.size(), &pairs);

        Ok(Self {
            matrix,
            pairs,
            summary,
        })
    }

    /// The symmetric Kappa matrix
    pub fn matrix(&self) -> &AgreementMatrix {
        &self.matrix
    }

    /// Per-pair results in canonical order
    pub fn pairs(&self) -> &[PairReport] {
        &self.pairs
    }

    /// Run-level statistics
    pub fn summary(&self) -> &AgreementSummary {
        &self.summary
    }

    /// Generate a plain-text summary of the report
    pub fn summary_text(&self) -> String {
        let s = &self.summary;
        let mut lines = vec![
            "Agreement Summary".to_string(),
            "=================".to_string(),
            format!("Annotators: {}", s.annotators),
            format!("Pairs: {} ({} undefined)", s.pairs, s.undefined_pairs),
        ];

        match (s.mean_kappa, s.min_kappa, s.max_kappa) {
            (Some(mean), Some(min), Some(max)) => {
                lines.push(format!("Mean kappa: {:.3} ({})", mean, s.mean_band));
                lines.push(format!("Range: {:.3} to {:.3}", min, max));
            }
            _ => lines.push(format!("Mean kappa: {}", QualitativeBand::NotApplicable)),
        }

        if let Some(exact) = s.mean_exact_match {
            lines.push(format!("Mean exact match: {:.1}%", exact * 100.0));
        }

        if !self.pairs.is_empty() {
            lines.push(String::new());
            lines.push("Pairs:".to_string());
            for pair in &self.pairs {
                lines.push(format!(
                    "  {}: kappa {:.3} [{}], exact {:.1}%",
                    pair.label,
                    pair.kappa,
                    pair.band,
                    pair.exact_match * 100.0
                ));
            }
        }

        lines.join("\n")
    }
}
