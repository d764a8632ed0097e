//! Core types for the settlement engine

use group_core::MemberId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Suggested point-to-point payment
///
/// Ephemeral output, never persisted. Applying it adds `amount` to the
/// debtor's net balance and subtracts it from the creditor's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Debtor (pays)
    pub from: MemberId,

    /// Creditor (receives)
    pub to: MemberId,

    /// Amount to pay (> 0, minor-unit precision)
    pub amount: Decimal,
}

/// Result of a settle-up run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementPlan {
    /// Suggested transfers, in emission order
    pub transfers: Vec<Transfer>,

    /// Summary statistics
    pub stats: PlanStats,
}

impl SettlementPlan {
    /// Whether the group is already settled
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}

/// Settlement plan statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanStats {
    /// Members in the balance mapping
    pub member_count: usize,

    /// Members owing money after rounding
    pub debtor_count: usize,

    /// Members owed money after rounding
    pub creditor_count: usize,

    /// Transfers suggested
    pub transfer_count: usize,

    /// Total amount moved by the suggested transfers
    pub total_transferred: Decimal,
}
