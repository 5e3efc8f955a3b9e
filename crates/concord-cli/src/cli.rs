//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Concord CLI - Measure agreement between annotators.
#[derive(Debug, Parser)]
#[command(name = "concord")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CONCORD_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare two inline label sequences
    Kappa(KappaArgs),

    /// Build the pairwise agreement matrix for N annotators
    Matrix(MatrixArgs),

    /// Interpret a Kappa value on the Landis & Koch scale
    Interpret(InterpretArgs),
}

/// Arguments for the kappa command.
#[derive(Debug, Parser)]
pub struct KappaArgs {
    /// First annotator's labels (e.g. "A,B,A,A")
    pub first: String,

    /// Second annotator's labels (e.g. "A,B,B,A")
    pub second: String,

    /// Label separator
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,
}

/// Arguments for the matrix command.
#[derive(Debug, Parser)]
pub struct MatrixArgs {
    /// JSON file with aligned label sequences
    #[arg(long)]
    pub file: Option<String>,

    /// Read the JSON document from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Reject misaligned or empty sequences instead of marking pairs N/A
    #[arg(long)]
    pub strict: bool,

    /// Evaluate pairs in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the interpret command.
#[derive(Debug, Parser)]
pub struct InterpretArgs {
    /// Kappa value, or "na" for an undefined coefficient
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
