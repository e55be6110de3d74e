//! Paycheck plan model
//!
//! A plan bundles everything the allocator needs into one serializable
//! document, so the CLI can read it from a JSON or YAML file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::bill::Bill;
use super::goal::{Goal, PercentBasis};
use super::money::Money;
use crate::error::{WaterfallError, WaterfallResult};

/// A paycheck plus the bills and goals it should fund
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaycheckPlan {
    pub paycheck: Money,
    #[serde(default)]
    pub bills: Vec<Bill>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    /// Falls back to the configured default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_apply: Option<PercentBasis>,
}

impl PaycheckPlan {
    /// Create a plan with no bills or goals
    pub fn new(paycheck: Money) -> Self {
        Self {
            paycheck,
            ..Self::default()
        }
    }

    /// Append a bill, funded after those already present
    pub fn with_bill(mut self, bill: Bill) -> Self {
        self.bills.push(bill);
        self
    }

    /// Append a goal
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goals.push(goal);
        self
    }

    /// Pin the percent basis instead of using the configured default
    pub fn with_basis(mut self, basis: PercentBasis) -> Self {
        self.percent_apply = Some(basis);
        self
    }

    /// The plan used by `waterfall demo`
    pub fn demo() -> Self {
        Self::new(Money::from_dollars_cents(2000, 0))
            .with_bill(Bill::new("Rent", Money::from_dollars_cents(1200, 0)))
            .with_bill(Bill::new("Utilities", Money::from_dollars_cents(200, 0)))
            .with_goal(Goal::percent("Invest", 10.0))
            .with_goal(Goal::fixed("Emergency", 100.0))
            .with_basis(PercentBasis::Gross)
    }

    /// Parse a plan from JSON
    pub fn from_json_str(json: &str) -> WaterfallResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a plan from YAML
    pub fn from_yaml_str(yaml: &str) -> WaterfallResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a plan from disk
    ///
    /// `.yaml` and `.yml` files are read as YAML, anything else as JSON.
    pub fn load(path: &Path) -> WaterfallResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            WaterfallError::Io(format!("Failed to read plan '{}': {}", path.display(), e))
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        if is_yaml {
            Self::from_yaml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
    }
}
