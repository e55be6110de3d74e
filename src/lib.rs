//! Paycheck Waterfall - split one paycheck across bills, goals, and
//! guilt-free spending
//!
//! Bills are funded first, in order. Goals (a percentage of the paycheck or
//! of what bills left, or a fixed amount) are funded next and scaled down
//! together when they want more than is left. The rest is guilt-free.
//!
//! # Architecture
//!
//! - `models`: money, bills, goals, plans, and allocation results
//! - `services`: the allocator
//! - `error`: custom error types
//! - `config`: settings and path management
//! - `export`: JSON, YAML, and CSV writers
//! - `display`: terminal tables
//! - `cli`: command handlers for the `waterfall` binary
//!
//! # Example
//!
//! ```
//! use paycheck_waterfall::models::{Bill, Goal, Money, PercentBasis};
//! use paycheck_waterfall::services::allocate;
//!
//! let bills = vec![Bill::new("Rent", Money::from_decimal(400.0))];
//! let goals = vec![Goal::percent("Invest", 10.0)];
//!
//! let result = allocate(Money::from_decimal(1000.0), &bills, &goals, PercentBasis::Remainder)?;
//! assert_eq!(result.goals[0].allocated, Money::from_decimal(60.0));
//! assert_eq!(result.guilt_free, Money::from_decimal(540.0));
//! # Ok::<(), paycheck_waterfall::WaterfallError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{WaterfallError, WaterfallResult};
pub use models::{AllocationResult, Bill, Goal, GoalKind, Money, PercentBasis};
pub use services::allocate;
