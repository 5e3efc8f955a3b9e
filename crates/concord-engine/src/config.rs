//! Configuration for the agreement engine

use serde::{Deserialize, Serialize};

/// How the engine treats annotators whose sequences differ in length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthPolicy {
    /// Compare every pair; misaligned pairs report an undefined Kappa
    #[default]
    Lenient,
    /// Reject the whole run when any sequence is empty or misaligned
    Strict,
}

/// Configuration for the agreement engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Policy for sequences of unequal length
    pub length_policy: LengthPolicy,

    /// Evaluate pairs on the rayon thread pool
    pub parallel: bool,

    /// Minimum number of pairs before the parallel path is taken
    pub parallel_min_pairs: usize,

    /// Prefix for generated annotator labels (`"{prefix} {n}"`)
    pub annotator_prefix: String,

    /// Minimum number of annotators required for a run
    pub min_annotators: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            length_policy: LengthPolicy::Lenient,
            parallel: false,
            parallel_min_pairs: 16,
            annotator_prefix: "Worker".to_string(),
            min_annotators: 2,
        }
    }
}

impl EngineConfig {
    /// Lenient preset: per-pair degradation, sequential evaluation
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Strict preset: fail fast on any misaligned or empty sequence
    pub fn strict() -> Self {
        Self {
            length_policy: LengthPolicy::Strict,
            ..Self::default()
        }
    }

    /// Label for the annotator at zero-based `index`
    pub fn annotator_label(&self, index: usize) -> String {
        format!("{} {}", self.annotator_prefix, index + 1)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_annotators < 2 {
            return Err("min_annotators must be at least 2".to_string());
        }
        if self.parallel_min_pairs == 0 {
            return Err("parallel_min_pairs must be greater than 0".to_string());
        }
        if self.annotator_prefix.trim().is_empty() {
            return Err("annotator_prefix cannot be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.length_policy, LengthPolicy::Lenient);
    }

    #[test]
    fn test_strict_config_is_valid() {
        let config = EngineConfig::strict();
        assert!(config.validate().is_ok());
        assert_eq!(config.length_policy, LengthPolicy::Strict);
    }

    #[test]
    fn test_invalid_min_annotators() {
        let mut config = EngineConfig::default();
        config.min_annotators = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_parallel_threshold() {
        let mut config = EngineConfig::default();
        config.parallel_min_pairs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_prefix() {
        let mut config = EngineConfig::default();
        config.annotator_prefix = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_annotator_label() {
        let config = EngineConfig::default();
        assert_eq!(config.annotator_label(0), "Worker 1");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml(
            r#"
            length_policy = "strict"
            parallel = true
            "#,
        )
        .unwrap();

        assert_eq!(config.length_policy, LengthPolicy::Strict);
        assert!(config.parallel);
        assert_eq!(config.parallel_min_pairs, 16);
        assert_eq!(config.annotator_prefix, "Worker");
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(EngineConfig::from_toml(r#"length_policy = "loose""#).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::strict();
        let toml_str = config.to_toml().unwrap();
        let parsed = EngineConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
