//! Service layer for Paycheck Waterfall
//!
//! The service layer holds the allocation logic on top of the models.

pub mod allocation;

pub use allocation::{allocate, allocate_plan, AllocationService};
