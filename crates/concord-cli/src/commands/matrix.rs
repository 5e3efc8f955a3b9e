//! Matrix command implementation.

use crate::cli::MatrixArgs;
use crate::error::{CliError, Result};
use crate::input::{parse_input, AnnotatorInput};
use crate::output::Formatter;
use concord_engine::{AgreementEngine, AgreementReport, EngineConfig, LengthPolicy};
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// Execute the matrix command.
pub fn execute_matrix(
    args: MatrixArgs,
    engine_config: &EngineConfig,
    formatter: &Formatter,
) -> Result<()> {
    let json_data = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(file_path) = &args.file {
        fs::read_to_string(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ));
    };

    let input = parse_input(&json_data)?;
    info!(annotators = input.sequences.len(), "Loaded label sequences");

    let mut config = engine_config.clone();
    if args.strict {
        config.length_policy = LengthPolicy::Strict;
    }
    if args.parallel {
        config.parallel = true;
    }

    let report = run_analysis(&AgreementEngine::new(config)?, input)?;

    println!("{}", formatter.format_report(&report)?);

    Ok(())
}

/// Run the engine, filling unnamed annotators with generated labels.
pub fn run_analysis(engine: &AgreementEngine, input: AnnotatorInput) -> Result<AgreementReport> {
    let names: Vec<String> = input
        .names
        .into_iter()
        .enumerate()
        .map(|(i, name)| name.unwrap_or_else(|| engine.config().annotator_label(i)))
        .collect();

    Ok(engine.analyze_named(&names, &input.sequences)?)
}
