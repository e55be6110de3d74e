//! Allocation result model
//!
//! The full breakdown of one paycheck: what each bill and goal received and
//! what is left for guilt-free spending.

use serde::{Deserialize, Serialize};

use super::bill::BillResult;
use super::goal::GoalResult;
use super::money::Money;

/// Summary figures for an allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationMeta {
    pub paycheck: Money,
    pub remaining_after_bills: Money,
}

/// The result of splitting one paycheck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub bills: Vec<BillResult>,
    pub goals: Vec<GoalResult>,
    pub guilt_free: Money,
    pub meta: AllocationMeta,
}

impl AllocationResult {
    /// Total paid toward bills
    pub fn bills_allocated(&self) -> Money {
        self.bills.iter().map(|b| b.allocated).sum()
    }

    /// Total still owed on bills after this paycheck
    pub fn bills_outstanding(&self) -> Money {
        self.bills.iter().map(|b| b.remaining).sum()
    }

    /// Total put toward goals
    pub fn goals_allocated(&self) -> Money {
        self.goals.iter().map(|g| g.allocated).sum()
    }

    /// Total the goals asked for before capping
    pub fn goals_desired(&self) -> Money {
        self.goals.iter().map(|g| g.desired).sum()
    }

    /// Everything handed out, guilt-free spending included
    ///
    /// Always equals `meta.paycheck`.
    pub fn total_allocated(&self) -> Money {
        self.bills_allocated() + self.goals_allocated() + self.guilt_free
    }

    /// Bills that were not fully covered
    pub fn underfunded_bills(&self) -> impl Iterator<Item = &BillResult> {
        self.bills.iter().filter(|b| !b.is_covered())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalKind;

    fn sample() -> AllocationResult {
        AllocationResult {
            bills: vec![
                BillResult {
                    name: "Rent".into(),
                    required: Money::from_cents(100000),
                    allocated: Money::from_cents(90000),
                    remaining: Money::from_cents(10000),
                },
                BillResult {
                    name: "Utilities".into(),
                    required: Money::from_cents(20000),
                    allocated: Money::zero(),
                    remaining: Money::from_cents(20000),
                },
            ],
            goals: vec![GoalResult {
                name: "Invest".into(),
                kind: GoalKind::Percent,
                value: 10.0,
                desired: Money::from_cents(9000),
                allocated: Money::zero(),
            }],
            guilt_free: Money::zero(),
            meta: AllocationMeta {
                paycheck: Money::from_cents(90000),
                remaining_after_bills: Money::zero(),
            },
        }
    }

    #[test]
    fn test_totals() {
        let result = sample();
        assert_eq!(result.bills_allocated().cents(), 90000);
        assert_eq!(result.bills_outstanding().cents(), 30000);
        assert_eq!(result.goals_desired().cents(), 9000);
        assert!(result.goals_allocated().is_zero());
        assert_eq!(result.total_allocated(), result.meta.paycheck);
    }

    #[test]
    fn test_underfunded_bills() {
        let result = sample();
        let names: Vec<_> = result.underfunded_bills().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Utilities"]);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["bills"][0]["remaining"], 100.0);
        assert_eq!(value["goals"][0]["type"], "percent");
        assert_eq!(value["guilt_free"], 0.0);
        assert_eq!(value["meta"]["paycheck"], 900.0);
    }
}
