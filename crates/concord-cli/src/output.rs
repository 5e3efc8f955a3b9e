//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use concord_domain::{KappaValue, QualitativeBand};
use concord_engine::AgreementReport;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    precision: usize,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, precision: usize) -> Self {
        Self {
            format,
            color_enabled,
            precision,
        }
    }

    /// Format a full agreement report.
    pub fn format_report(&self, report: &AgreementReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(self.format_report_quiet(report)),
        }
    }

    /// Format the result of comparing two sequences.
    pub fn format_pair(
        &self,
        kappa: KappaValue,
        band: QualitativeBand,
        exact: f64,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "kappa": kappa.value(),
                "band": band.as_str(),
                "exact_match": exact,
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Value"]);
                builder.push_record(["Kappa".to_string(), self.kappa_cell(kappa)]);
                builder.push_record(["Band".to_string(), band.to_string()]);
                builder.push_record(["Exact match".to_string(), percent(exact)]);
                let table = self.render(builder);
                Ok(format!("{}\n{}", table, self.band_line(band)))
            }
            OutputFormat::Quiet => Ok(self.kappa_cell(kappa)),
        }
    }

    /// Format a band lookup.
    pub fn format_band(&self, kappa: KappaValue, band: QualitativeBand) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "kappa": kappa.value(),
                "band": band.as_str(),
            }))?),
            OutputFormat::Table => Ok(self.band_line(band)),
            OutputFormat::Quiet => Ok(band.to_string()),
        }
    }

    fn format_report_json(&self, report: &AgreementReport) -> Result<String> {
        let matrix = report.matrix();
        let grid: Vec<Vec<Option<f64>>> = matrix
            .values()
            .iter()
            .map(|row| row.iter().map(KappaValue::value).collect())
            .collect();

        let pairs: Vec<serde_json::Value> = report
            .pairs()
            .iter()
            .map(|p| {
                json!({
                    "label": p.label,
                    "first": p.first,
                    "second": p.second,
                    "kappa": p.kappa.value(),
                    "band": p.band.as_str(),
                    "exact_match": p.exact_match,
                })
            })
            .collect();

        let s = report.summary();
        let value = json!({
            "annotators": matrix.annotator_labels(),
            "matrix": grid,
            "pairs": pairs,
            "summary": {
                "annotators": s.annotators,
                "pairs": s.pairs,
                "defined_pairs": s.defined_pairs,
                "undefined_pairs": s.undefined_pairs,
                "mean_kappa": s.mean_kappa,
                "min_kappa": s.min_kappa,
                "max_kappa": s.max_kappa,
                "mean_band": s.mean_band.as_str(),
                "mean_exact_match": s.mean_exact_match,
            }
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_report_table(&self, report: &AgreementReport) -> String {
        let matrix = report.matrix();

        let mut grid = Builder::default();
        let mut header = vec![String::new()];
        header.extend(matrix.annotator_labels().iter().cloned());
        grid.push_record(header);
        for (label, row) in matrix.annotator_labels().iter().zip(matrix.values()) {
            let mut record = vec![label.clone()];
            record.extend(row.iter().map(|k| self.kappa_cell(*k)));
            grid.push_record(record);
        }

        let mut pairs = Builder::default();
        pairs.push_record(["Pair", "Kappa", "Band", "Exact match"]);
        for pair in report.pairs() {
            pairs.push_record([
                pair.label.clone(),
                self.kappa_cell(pair.kappa),
                pair.band.to_string(),
                percent(pair.exact_match),
            ]);
        }

        let s = report.summary();
        let mean = s
            .mean_kappa
            .map_or_else(|| "N/A".to_string(), |m| format!("{:.*}", self.precision, m));
        let overall = self.band_line(s.mean_band);

        let mut sections = vec![self.render(grid), self.render(pairs)];
        sections.push(format!("Mean kappa: {} {}", mean, overall));
        if s.undefined_pairs > 0 {
            sections.push(self.colorize(
                &format!("⚠ {} pair(s) have no defined kappa", s.undefined_pairs),
                "yellow",
            ));
        }
        sections.join("\n")
    }

    fn format_report_quiet(&self, report: &AgreementReport) -> String {
        report
            .pairs()
            .iter()
            .map(|p| self.kappa_cell(p.kappa))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn kappa_cell(&self, kappa: KappaValue) -> String {
        format!("{:.*}", self.precision, kappa)
    }

    fn band_line(&self, band: QualitativeBand) -> String {
        let color = match band {
            QualitativeBand::NotApplicable => "magenta",
            QualitativeBand::Poor => "red",
            QualitativeBand::Slight | QualitativeBand::Fair => "yellow",
            QualitativeBand::Moderate => "cyan",
            QualitativeBand::Substantial | QualitativeBand::AlmostPerfect => "green",
        };
        self.colorize(&format!("({})", band), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_domain::LabelSequence;
    use concord_engine::AgreementEngine;

    fn sample_report() -> AgreementReport {
        AgreementEngine::default_config()
            .analyze(&[
                LabelSequence::from(["A", "B", "A", "A"]),
                LabelSequence::from(["A", "B", "B", "A"]),
                LabelSequence::from(["X", "X"]),
            ])
            .unwrap()
    }

    #[test]
    fn test_json_report() {
        let formatter = Formatter::new(OutputFormat::Json, false, 3);
        let output = formatter.format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["matrix"][0][0], 1.0);
        assert_eq!(value["matrix"][0][1], 0.5);
        assert!(value["matrix"][0][2].is_null());
        assert_eq!(value["pairs"][0]["band"], "Moderate");
        assert_eq!(value["pairs"][0]["exact_match"], 0.75);
        assert_eq!(value["summary"]["undefined_pairs"], 2);
    }

    #[test]
    fn test_table_report() {
        let formatter = Formatter::new(OutputFormat::Table, false, 2);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("Worker 1 vs Worker 2"));
        assert!(output.contains("0.50"));
        assert!(output.contains("N/A"));
        assert!(output.contains("Mean kappa: 0.50 (Moderate)"));
        assert!(output.contains("2 pair(s) have no defined kappa"));
    }

    #[test]
    fn test_quiet_report() {
        let formatter = Formatter::new(OutputFormat::Quiet, false, 3);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert_eq!(output, "0.500\nN/A\nN/A");
    }

    #[test]
    fn test_pair_output() {
        let formatter = Formatter::new(OutputFormat::Table, false, 3);
        let output = formatter
            .format_pair(KappaValue::Defined(0.5), QualitativeBand::Moderate, 0.75)
            .unwrap();
        assert!(output.contains("0.500"));
        assert!(output.contains("75.0%"));
        assert!(output.contains("(Moderate)"));
    }

    #[test]
    fn test_band_output() {
        let formatter = Formatter::new(OutputFormat::Quiet, false, 3);
        let output = formatter
            .format_band(KappaValue::Undefined, QualitativeBand::NotApplicable)
            .unwrap();
        assert_eq!(output, "N/A");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false, 3);
        assert_eq!(formatter.band_line(QualitativeBand::Poor), "(Poor)");
    }
}
