//! Interpret command implementation.

use crate::cli::InterpretArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use concord_domain::{interpret_kappa, KappaValue};

/// Execute the interpret command.
pub fn execute_interpret(args: InterpretArgs, formatter: &Formatter) -> Result<()> {
    let kappa = parse_kappa(&args.value)?;
    println!("{}", formatter.format_band(kappa, interpret_kappa(kappa))?);
    Ok(())
}

fn parse_kappa(value: &str) -> Result<KappaValue> {
    let value = value.trim();
    match value.to_lowercase().as_str() {
        "na" | "n/a" | "undefined" => return Ok(KappaValue::Undefined),
        _ => {}
    }

    let kappa: f64 = value
        .parse()
        .map_err(|_| CliError::InvalidInput(format!("'{}' is not a kappa value", value)))?;
    if !kappa.is_finite() {
        return Err(CliError::InvalidInput(format!("'{}' is not finite", value)));
    }
    Ok(KappaValue::Defined(kappa))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kappa() {
        assert_eq!(parse_kappa("0.45").unwrap(), KappaValue::Defined(0.45));
        assert_eq!(parse_kappa("-0.1").unwrap(), KappaValue::Defined(-0.1));
        assert_eq!(parse_kappa("N/A").unwrap(), KappaValue::Undefined);
        assert_eq!(parse_kappa(" na ").unwrap(), KappaValue::Undefined);
    }

    #[test]
    fn test_parse_kappa_rejects_garbage() {
        assert!(parse_kappa("high").is_err());
        assert!(parse_kappa("inf").is_err());
        assert!(parse_kappa("NaN").is_err());
    }
}
