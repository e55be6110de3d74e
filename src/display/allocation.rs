//! Allocation display formatting
//!
//! Renders an allocation result as terminal tables: bills, goals, and a
//! short summary.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::report::{format_percentage, separator};
use crate::models::{AllocationResult, BillResult, GoalKind, GoalResult, Money};

#[derive(Tabled)]
struct BillRow {
    #[tabled(rename = "Bill")]
    name: String,
    #[tabled(rename = "Required")]
    required: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

impl BillRow {
    fn new(bill: &BillResult, symbol: &str) -> Self {
        Self {
            name: bill.name.clone(),
            required: bill.required.format_with_symbol(symbol),
            allocated: bill.allocated.format_with_symbol(symbol),
            remaining: bill.remaining.format_with_symbol(symbol),
        }
    }
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Desired")]
    desired: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
}

impl GoalRow {
    fn new(goal: &GoalResult, symbol: &str) -> Self {
        let target = match goal.kind {
            GoalKind::Percent => format_percentage(goal.value),
            GoalKind::Fixed => Money::from_decimal(goal.value).format_with_symbol(symbol),
        };

        Self {
            name: goal.name.clone(),
            target,
            desired: goal.desired.format_with_symbol(symbol),
            allocated: goal.allocated.format_with_symbol(symbol),
        }
    }
}

fn render<R: Tabled>(rows: Vec<R>) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

/// Format an allocation result as tables with a summary
pub fn format_allocation_table(result: &AllocationResult, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Bills\n");
    if result.bills.is_empty() {
        output.push_str("  (no bills)\n");
    } else {
        let rows = result.bills.iter().map(|b| BillRow::new(b, symbol)).collect();
        output.push_str(&render::<BillRow>(rows));
        output.push('\n');
    }

    output.push('\n');
    output.push_str("Goals\n");
    if result.goals.is_empty() {
        output.push_str("  (no goals)\n");
    } else {
        let rows = result.goals.iter().map(|g| GoalRow::new(g, symbol)).collect();
        output.push_str(&render::<GoalRow>(rows));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_summary(result, symbol));

    output
}

/// Format the totals block shown under the tables
pub fn format_summary(result: &AllocationResult, symbol: &str) -> String {
    let width = 36;
    let mut output = String::new();

    let line = |label: &str, value: String| format!("{:<22}{:>14}\n", label, value);

    output.push_str(&line("Paycheck", result.meta.paycheck.format_with_symbol(symbol)));
    output.push_str(&line("Bills", result.bills_allocated().format_with_symbol(symbol)));
    output.push_str(&line(
        "After bills",
        result.meta.remaining_after_bills.format_with_symbol(symbol),
    ));
    output.push_str(&line("Goals", result.goals_allocated().format_with_symbol(symbol)));
    output.push_str(&separator(width));
    output.push('\n');
    output.push_str(&line("Guilt-free", result.guilt_free.format_with_symbol(symbol)));

    let desired = result.goals_desired();
    if desired > result.goals_allocated() && result.goals_allocated().is_positive() {
        output.push_str(&format!(
            "\nGoals wanted {} and were scaled to fit\n",
            desired.format_with_symbol(symbol)
        ));
    }

    let underfunded: Vec<&str> = result.underfunded_bills().map(|b| b.name.as_str()).collect();
    if !underfunded.is_empty() {
        output.push('\n');
        output.push_str(&format!(
            "Warning: {} of bills left unpaid ({})\n",
            result.bills_outstanding().format_with_symbol(symbol),
            underfunded.join(", ")
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bill, Goal, PercentBasis};
    use crate::services::allocate;

    #[test]
    fn test_table_contains_rows() {
        let result = allocate(
            Money::from_decimal(2000.0),
            &[
                Bill::new("Rent", Money::from_decimal(1200.0)),
                Bill::new("Utilities", Money::from_decimal(200.0)),
            ],
            &[Goal::percent("Invest", 10.0), Goal::fixed("Emergency", 100.0)],
            PercentBasis::Gross,
        )
        .unwrap();

        let table = format_allocation_table(&result, "$");
        assert!(table.contains("Rent"));
        assert!(table.contains("$1200.00"));
        assert!(table.contains("Invest"));
        assert!(table.contains("10%"));
        assert!(table.contains("Guilt-free"));
        assert!(table.contains("$300.00"));
        assert!(!table.contains("Warning"));
    }

    #[test]
    fn test_empty_sections() {
        let result = allocate(Money::from_decimal(50.0), &[], &[], PercentBasis::Gross).unwrap();

        let table = format_allocation_table(&result, "€");
        assert!(table.contains("(no bills)"));
        assert!(table.contains("(no goals)"));
        assert!(table.contains("€50.00"));
    }

    #[test]
    fn test_summary_warns_on_unpaid_bills() {
        let result = allocate(
            Money::from_decimal(900.0),
            &[Bill::new("Rent", Money::from_decimal(1000.0))],
            &[],
            PercentBasis::Gross,
        )
        .unwrap();

        let summary = format_summary(&result, "$");
        assert!(summary.contains("Warning: $100.00 of bills left unpaid (Rent)"));
    }

    #[test]
    fn test_summary_lists_only_underfunded_bills() {
        let result = allocate(
            Money::from_decimal(250.0),
            &[
                Bill::new("Phone", Money::from_decimal(50.0)),
                Bill::new("Rent", Money::from_decimal(1000.0)),
                Bill::new("Utilities", Money::from_decimal(200.0)),
            ],
            &[],
            PercentBasis::Gross,
        )
        .unwrap();

        let summary = format_summary(&result, "$");
        assert!(summary.contains("of bills left unpaid (Rent, Utilities)"));
    }

    #[test]
    fn test_summary_notes_scaled_goals() {
        let result = allocate(
            Money::from_decimal(200.0),
            &[],
            &[Goal::fixed("Big", 300.0), Goal::fixed("Small", 100.0)],
            PercentBasis::Gross,
        )
        .unwrap();

        let summary = format_summary(&result, "$");
        assert!(summary.contains("Goals wanted $400.00 and were scaled to fit"));
        assert!(!summary.contains("Warning"));
    }
}
