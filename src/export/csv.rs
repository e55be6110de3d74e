//! CSV export functionality
//!
//! Flattens an allocation into rows: one per bill, one per goal, and a final
//! guilt-free row. Columns that don't apply to a row are left empty.

use serde::Serialize;
use std::io::Write;

use crate::error::WaterfallResult;
use crate::models::{AllocationResult, Money};

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Section")]
    section: &'static str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Required")]
    required: Option<String>,
    #[serde(rename = "Desired")]
    desired: Option<String>,
    #[serde(rename = "Allocated")]
    allocated: String,
    #[serde(rename = "Remaining")]
    remaining: Option<String>,
}

fn amount(money: Money) -> String {
    money.format_with_symbol("")
}

/// Write an allocation result as CSV
pub fn write_csv<W: Write>(result: &AllocationResult, writer: &mut W) -> WaterfallResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for bill in &result.bills {
        csv_writer.serialize(CsvRow {
            section: "bill",
            name: &bill.name,
            required: Some(amount(bill.required)),
            desired: None,
            allocated: amount(bill.allocated),
            remaining: Some(amount(bill.remaining)),
        })?;
    }

    for goal in &result.goals {
        csv_writer.serialize(CsvRow {
            section: "goal",
            name: &goal.name,
            required: None,
            desired: Some(amount(goal.desired)),
            allocated: amount(goal.allocated),
            remaining: Some(amount(goal.shortfall())),
        })?;
    }

    csv_writer.serialize(CsvRow {
        section: "guilt_free",
        name: "Guilt-free",
        required: None,
        desired: None,
        allocated: amount(result.guilt_free),
        remaining: None,
    })?;

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bill, Goal, PercentBasis};
    use crate::services::allocate;

    #[test]
    fn test_csv_export() {
        let result = allocate(
            Money::from_decimal(900.0),
            &[
                Bill::new("Rent", Money::from_decimal(1000.0)),
                Bill::new("Utilities, Water", Money::from_decimal(200.0)),
            ],
            &[Goal::fixed("Save", 50.0)],
            PercentBasis::Gross,
        )
        .unwrap();

        let mut output = Vec::new();
        write_csv(&result, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Section,Name,Required,Desired,Allocated,Remaining");
        assert_eq!(lines[1], "bill,Rent,1000.00,,900.00,100.00");
        assert_eq!(lines[2], "bill,\"Utilities, Water\",200.00,,0.00,200.00");
        assert_eq!(lines[3], "goal,Save,,50.00,0.00,50.00");
        assert_eq!(lines[4], "guilt_free,Guilt-free,,,0.00,");
        assert_eq!(lines.len(), 5);
    }
}
