//! YAML export functionality
//!
//! Writes an allocation result to YAML with a short header comment.

use chrono::Utc;
use std::io::Write;

use crate::error::{WaterfallError, WaterfallResult};
use crate::models::AllocationResult;

/// Write an allocation result as YAML
pub fn write_yaml<W: Write>(result: &AllocationResult, writer: &mut W) -> WaterfallResult<()> {
    writeln!(writer, "# Paycheck Waterfall allocation")
        .map_err(|e| WaterfallError::Export(e.to_string()))?;
    writeln!(
        writer,
        "# Generated: {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .map_err(|e| WaterfallError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| WaterfallError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, result).map_err(|e| WaterfallError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bill, Goal, Money, PercentBasis};
    use crate::services::allocate;

    #[test]
    fn test_yaml_export() {
        let result = allocate(
            Money::from_decimal(500.0),
            &[Bill::new("Rent", Money::from_decimal(200.0))],
            &[Goal::fixed("A", 200.0), Goal::fixed("B", 200.0)],
            PercentBasis::Gross,
        )
        .unwrap();

        let mut output = Vec::new();
        write_yaml(&result, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Paycheck Waterfall allocation"));
        assert!(text.contains("guilt_free: 0.0"));

        let parsed: AllocationResult = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, result);
    }
}
