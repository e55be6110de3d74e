//! Export module for Paycheck Waterfall
//!
//! Writes an allocation result in several formats:
//! - JSON: machine-readable, the default
//! - YAML: human-readable, with a header comment
//! - CSV: one row per bill and goal, spreadsheet-compatible

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::write_csv;
pub use json::write_json;
pub use yaml::write_yaml;
