//! Qualitative band module (Landis & Koch scale)

use crate::KappaValue;
use std::fmt;

/// Reliability tier derived from a Kappa value
///
/// Each band's lower bound is inclusive:
/// - Poor: below 0
/// - Slight: [0.0, 0.2)
/// - Fair: [0.2, 0.4)
/// - Moderate: [0.4, 0.6)
/// - Substantial: [0.6, 0.8)
/// - Almost Perfect: 0.8 and above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QualitativeBand {
    /// Kappa was undefined
    NotApplicable,

    /// Less than chance agreement
    Poor,

    /// Slight agreement
    Slight,

    /// Fair agreement
    Fair,

    /// Moderate agreement
    Moderate,

    /// Substantial agreement
    Substantial,

    /// Almost perfect agreement
    AlmostPerfect,
}

impl QualitativeBand {
    /// All bands, from undefined through strongest
    pub const ALL: [QualitativeBand; 7] = [
        QualitativeBand::NotApplicable,
        QualitativeBand::Poor,
        QualitativeBand::Slight,
        QualitativeBand::Fair,
        QualitativeBand::Moderate,
        QualitativeBand::Substantial,
        QualitativeBand::AlmostPerfect,
    ];

    /// Band for a raw coefficient
    pub fn from_coefficient(kappa: f64) -> Self {
        if kappa < 0.0 {
            QualitativeBand::Poor
        } else if kappa < 0.2 {
            QualitativeBand::Slight
        } else if kappa < 0.4 {
            QualitativeBand::Fair
        } else if kappa < 0.6 {
            QualitativeBand::Moderate
        } else if kappa < 0.8 {
            QualitativeBand::Substantial
        } else {
            QualitativeBand::AlmostPerfect
        }
    }

    /// Display label for the band
    pub fn as_str(&self) -> &'static str {
        match self {
            QualitativeBand::NotApplicable => "N/A",
            QualitativeBand::Poor => "Poor",
            QualitativeBand::Slight => "Slight",
            QualitativeBand::Fair => "Fair",
            QualitativeBand::Moderate => "Moderate",
            QualitativeBand::Substantial => "Substantial",
            QualitativeBand::AlmostPerfect => "Almost Perfect",
        }
    }
}

impl fmt::Display for QualitativeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a Kappa value to its qualitative band
///
/// No value is rejected. Pathological coefficients above 1 still read as
/// Almost Perfect, and NaN (which fails every comparison) falls through to
/// the top band as well.
pub fn interpret_kappa(value: KappaValue) -> QualitativeBand {
    match value {
        KappaValue::Defined(kappa) => QualitativeBand::from_coefficient(kappa),
        KappaValue::Undefined => QualitativeBand::NotApplicable,
    }
}
