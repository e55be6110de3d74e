//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod allocate;
pub mod config;

pub use allocate::{handle_allocate_command, handle_demo_command, AllocateArgs, OutputArgs};
pub use config::{handle_config_command, ConfigCommands};
