//! Concord CLI - Command-line interface for inter-annotator agreement.

use clap::Parser;
use concord_cli::commands;
use concord_cli::{Cli, Command, Config, Formatter};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; RUST_LOG takes precedence over -v flags.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> concord_cli::Result<()> {
    let config = Config::load(cli.config.as_deref().map(Path::new))?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled, config.settings.precision);

    match cli.command {
        Command::Kappa(args) => commands::execute_kappa(args, &formatter)?,
        Command::Matrix(args) => commands::execute_matrix(args, &config.engine, &formatter)?,
        Command::Interpret(args) => commands::execute_interpret(args, &formatter)?,
    }

    Ok(())
}
