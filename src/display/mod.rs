//! Display formatting for terminal output
//!
//! Provides utilities for formatting allocation results for terminal display.

pub mod allocation;
pub mod report;

pub use allocation::{format_allocation_table, format_summary};
