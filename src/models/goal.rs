//! Goal model
//!
//! Goals are savings or spending targets funded after bills. A goal either
//! asks for a percentage of a basis amount or for a fixed amount.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{WaterfallError, WaterfallResult};

/// How a goal's `value` is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    /// `value` is a percentage of the percent basis (default)
    #[default]
    Percent,
    /// `value` is an absolute currency amount
    Fixed,
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent => write!(f, "percent"),
            Self::Fixed => write!(f, "fixed"),
        }
    }
}

impl FromStr for GoalKind {
    type Err = WaterfallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "percent" | "pct" | "%" => Ok(Self::Percent),
            "fixed" | "amount" => Ok(Self::Fixed),
            other => Err(WaterfallError::Parse(format!(
                "Unknown goal type '{}': expected 'percent' or 'fixed'",
                other
            ))),
        }
    }
}

/// What percentage goals are measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PercentBasis {
    /// The whole paycheck (default)
    #[default]
    Gross,
    /// What is left after bills
    Remainder,
}

impl fmt::Display for PercentBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gross => write!(f, "gross"),
            Self::Remainder => write!(f, "remainder"),
        }
    }
}

impl FromStr for PercentBasis {
    type Err = WaterfallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gross" => Ok(Self::Gross),
            "remainder" | "net" => Ok(Self::Remainder),
            other => Err(WaterfallError::Parse(format!(
                "Unknown percent basis '{}': expected 'gross' or 'remainder'",
                other
            ))),
        }
    }
}

/// A named savings or spending target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: GoalKind,
    pub value: f64,
}

impl Goal {
    /// Create a goal
    pub fn new(name: impl Into<String>, kind: GoalKind, value: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            value,
        }
    }

    /// A goal asking for `percent` percent of the basis
    pub fn percent(name: impl Into<String>, percent: f64) -> Self {
        Self::new(name, GoalKind::Percent, percent)
    }

    /// A goal asking for a fixed amount
    pub fn fixed(name: impl Into<String>, amount: f64) -> Self {
        Self::new(name, GoalKind::Fixed, amount)
    }

    /// The uncapped amount this goal wants, given the percent basis amount
    ///
    /// Fails with an invalid argument error when `value` is not finite or
    /// the amount it asks for is out of range.
    pub fn desired(&self, basis: Money) -> WaterfallResult<Money> {
        let desired = match self.kind {
            GoalKind::Percent => basis.percent(self.value),
            GoalKind::Fixed => Money::try_from_decimal(self.value),
        };

        desired.map_err(|e| {
            WaterfallError::invalid_argument(format!("goal '{}': {}", self.name, e))
        })
    }
}

/// How much of a goal one paycheck covered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalResult {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GoalKind,
    /// The goal's input value, echoed back
    pub value: f64,
    /// Uncapped target before scaling
    pub desired: Money,
    pub allocated: Money,
}

impl GoalResult {
    /// Start a result for `goal` with nothing allocated yet
    pub fn unfunded(goal: &Goal, basis: Money) -> WaterfallResult<Self> {
        Ok(Self {
            name: goal.name.clone(),
            kind: goal.kind,
            value: goal.value,
            desired: goal.desired(basis)?,
            allocated: Money::zero(),
        })
    }

    /// Amount of the desired target left unfunded
    pub fn shortfall(&self) -> Money {
        self.desired - self.allocated
    }
}
