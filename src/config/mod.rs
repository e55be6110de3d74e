//! Configuration module for Paycheck Waterfall
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WaterfallPaths;
pub use settings::{OutputFormat, Settings};
