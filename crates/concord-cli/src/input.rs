//! Label sequence input parsing.
//!
//! Two JSON shapes are accepted:
//!
//! ```json
//! [["A", "B", "A"], ["A", "B", "B"]]
//! ```
//!
//! ```json
//! {"annotators": [{"name": "gpt", "labels": ["A", "B", "A"]}]}
//! ```
//!
//! Numeric and boolean labels are stringified; null and nested values are rejected.

use crate::error::{CliError, Result};
use concord_domain::LabelSequence;
use serde::Deserialize;
use serde_json::Value;

/// Annotators read from an input document.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatorInput {
    /// Optional display name per annotator
    pub names: Vec<Option<String>>,

    /// Label sequence per annotator
    pub sequences: Vec<LabelSequence>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Named { annotators: Vec<AnnotatorDefinition> },
    Bare(Vec<Vec<Value>>),
}

#[derive(Debug, Deserialize)]
struct AnnotatorDefinition {
    #[serde(default)]
    name: Option<String>,
    labels: Vec<Value>,
}

/// Parse a JSON document into annotator sequences.
pub fn parse_input(json: &str) -> Result<AnnotatorInput> {
    let document: InputDocument = serde_json::from_str(json)?;

    let definitions: Vec<AnnotatorDefinition> = match document {
        InputDocument::Named { annotators } => annotators,
        InputDocument::Bare(rows) => rows
            .into_iter()
            .map(|labels| AnnotatorDefinition { name: None, labels })
            .collect(),
    };

    let mut names = Vec::with_capacity(definitions.len());
    let mut sequences = Vec::with_capacity(definitions.len());

    for (index, def) in definitions.into_iter().enumerate() {
        let labels = def
            .labels
            .iter()
            .enumerate()
            .map(|(item, value)| label_to_string(value, index, item))
            .collect::<Result<Vec<_>>>()?;

        names.push(def.name.filter(|n| !n.trim().is_empty()));
        sequences.push(LabelSequence::from(labels));
    }

    Ok(AnnotatorInput { names, sequences })
}

/// Split an inline label list, trimming whitespace around each label.
pub fn parse_inline(labels: &str, delimiter: &str) -> Result<LabelSequence> {
    if delimiter.is_empty() {
        return Err(CliError::InvalidInput("Delimiter cannot be empty".to_string()));
    }
    if labels.trim().is_empty() {
        return Ok(LabelSequence::default());
    }
    Ok(labels.split(delimiter).map(str::trim).collect())
}

fn label_to_string(value: &Value, annotator: usize, item: usize) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(CliError::InvalidInput(format!(
            "Annotator {} item {}: unsupported label {}",
            annotator + 1,
            item + 1,
            other
        ))),
    }
}
