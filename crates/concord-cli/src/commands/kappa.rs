//! Kappa command implementation.

use crate::cli::KappaArgs;
use crate::error::Result;
use crate::input::parse_inline;
use crate::output::Formatter;
use concord_domain::{compute_exact_match_rate, compute_kappa, interpret_kappa};
use tracing::debug;

/// Execute the kappa command.
pub fn execute_kappa(args: KappaArgs, formatter: &Formatter) -> Result<()> {
    let first = parse_inline(&args.first, &args.delimiter)?;
    let second = parse_inline(&args.second, &args.delimiter)?;
    debug!(first = first.len(), second = second.len(), "Comparing inline sequences");

    let kappa = compute_kappa(&first, &second);
    let exact = compute_exact_match_rate(&first, &second);

    println!("{}", formatter.format_pair(kappa, interpret_kappa(kappa), exact)?);

    Ok(())
}
