//! SplitLedger Settlement Engine
//!
//! Converts a group's expense records into per-member net balances and
//! proposes the smallest set of point-to-point payments that clears all
//! debts.
//!
//! # Architecture
//!
//! Two pure, stateless components composed one-way:
//!
//! 1. **Netting**: expense records + roster → signed net balance per member
//! 2. **Solving**: net balances → ordered list of suggested transfers
//!
//! The solver never sees raw expenses, so it can equally be fed balances
//! computed elsewhere (e.g. a server-side balances endpoint).
//!
//! # Example
//!
//! ```
//! use group_core::{Expense, Group, Member, Split};
//! use rust_decimal::Decimal;
//! use settlement::{Config, SettlementEngine};
//!
//! let group = Group::new(
//!     "trip",
//!     vec![
//!         Member::new("a", "Alice"),
//!         Member::new("b", "Bob"),
//!         Member::new("c", "Carol"),
//!     ],
//! );
//! let expenses = vec![Expense::new(
//!     "a",
//!     Decimal::new(3000, 2), // 30.00
//!     Split::equal(["a", "b", "c"]),
//! )];
//!
//! let engine = SettlementEngine::new(Config::default());
//! let nets = engine.balances(&group, &expenses).unwrap();
//! let plan = engine.settle_up(&nets);
//!
//! // Bob and Carol each pay Alice 10.00
//! assert_eq!(plan.transfers.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod config;
pub mod engine;
pub mod error;
pub mod netting;
pub mod solver;
pub mod types;

// Re-exports
pub use config::Config;
pub use engine::SettlementEngine;
pub use error::{Error, Result};
pub use netting::compute_nets;
pub use solver::DebtSolver;
pub use types::{PlanStats, SettlementPlan, Transfer};
