//! Core data models for Paycheck Waterfall
//!
//! This module contains the data structures the allocator works with:
//! money, bills, goals, plans, and allocation results.

pub mod allocation;
pub mod bill;
pub mod goal;
pub mod money;
pub mod plan;

pub use allocation::{AllocationMeta, AllocationResult};
pub use bill::{Bill, BillResult};
pub use goal::{Goal, GoalKind, GoalResult, PercentBasis};
pub use money::Money;
pub use plan::PaycheckPlan;
