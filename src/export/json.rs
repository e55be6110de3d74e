//! JSON export functionality

use std::io::Write;

use crate::error::{WaterfallError, WaterfallResult};
use crate::models::AllocationResult;

/// Write an allocation result as pretty-printed JSON followed by a newline
pub fn write_json<W: Write>(result: &AllocationResult, writer: &mut W) -> WaterfallResult<()> {
    serde_json::to_writer_pretty(&mut *writer, result)?;
    writeln!(writer).map_err(|e| WaterfallError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bill, Goal, Money, PercentBasis};
    use crate::services::allocate;

    #[test]
    fn test_json_export() {
        let result = allocate(
            Money::from_decimal(1000.0),
            &[Bill::new("Rent", Money::from_decimal(400.0))],
            &[Goal::percent("Invest", 10.0)],
            PercentBasis::Remainder,
        )
        .unwrap();

        let mut output = Vec::new();
        write_json(&result, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["bills"][0]["name"], "Rent");
        assert_eq!(value["goals"][0]["desired"], 60.0);
        assert_eq!(value["guilt_free"], 540.0);
        assert_eq!(value["meta"]["remaining_after_bills"], 600.0);
    }
}
