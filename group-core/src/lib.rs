//! SplitLedger Group Core
//!
//! Domain model for a shared-expense group: members, expense records,
//! split representations, and the shared money-rounding helpers used by
//! the settlement engine.
//!
//! # Invariants
//!
//! - Zero-sum: every expense credits its payer exactly what it debits
//!   its participants, so roster-closed expense lists net to zero
//! - Exact arithmetic: all amounts and weights are `Decimal`, never floats
//! - Deterministic: identical inputs always produce identical balances

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod error;
pub mod money;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use types::{Expense, Group, Member, MemberId, Split, SplitShare};
