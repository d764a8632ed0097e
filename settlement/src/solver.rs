//! Debt settlement solver
//!
//! Turns a net-balance mapping into an ordered list of suggested
//! transfers that zeroes out all balances.
//!
//! # Algorithm
//!
//! Greedy largest-magnitude matching with two cursors:
//!
//! 1. Round every net to the minor unit
//! 2. Partition into debtors (< −tolerance) and creditors (> +tolerance)
//! 3. Sort debtors ascending by signed amount, creditors descending
//! 4. Repeatedly transfer `min(|debtor|, creditor)` between the cursor
//!    pair, advancing whichever side drops below tolerance
//!
//! Always matching the largest debtor against the largest creditor
//! minimizes the transfer count in the common case of few, unevenly
//! sized balances. Every step fully resolves at least one side, so the
//! sweep emits at most `debtors + creditors − 1` transfers.
//!
//! # Example
//!
//! ```text
//! Nets:
//!   A: +34.00   B: −26.00   C: −2.00   D: −6.00
//!
//! Transfers:
//!   B pays A 26.00
//!   D pays A 6.00
//!   C pays A 2.00
//! ```

use crate::types::{PlanStats, SettlementPlan, Transfer};
use group_core::{money, MemberId};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Debt settlement solver
#[derive(Debug, Clone)]
pub struct DebtSolver {
    /// Absolute tolerance below which a balance counts as settled
    tolerance: Decimal,
}

impl Default for DebtSolver {
    fn default() -> Self {
        Self {
            tolerance: money::settled_tolerance(),
        }
    }
}

impl DebtSolver {
    /// Create solver with an explicit settled tolerance
    ///
    /// A zero tolerance treats only exact zeroes as settled; every
    /// rounded cent of imbalance then produces a transfer.
    pub fn new(tolerance: Decimal) -> Self {
        Self { tolerance }
    }

    /// Solve a net-balance mapping into suggested transfers
    ///
    /// Deterministic: the input map is ordered by member id and both
    /// sorts are stable, so equal balances tie-break on id. If the
    /// input does not sum to (approximately) zero the sweep still
    /// terminates, but the transfers will not fully settle the group.
    pub fn solve(&self, nets: &BTreeMap<MemberId, Decimal>) -> Vec<Transfer> {
        self.solve_plan(nets).transfers
    }

    /// Solve and return the plan with summary statistics
    pub fn solve_plan(&self, nets: &BTreeMap<MemberId, Decimal>) -> SettlementPlan {
        let mut debtors: Vec<(MemberId, Decimal)> = Vec::new();
        let mut creditors: Vec<(MemberId, Decimal)> = Vec::new();

        for (id, net) in nets {
            let rounded = money::round_minor(*net);
            if rounded < -self.tolerance {
                debtors.push((id.clone(), rounded));
            } else if rounded > self.tolerance {
                creditors.push((id.clone(), rounded));
            }
            // Within ±tolerance: settled, excluded from both sides
        }

        // Most negative debtor first, largest creditor first
        debtors.sort_by(|a, b| a.1.cmp(&b.1));
        creditors.sort_by(|a, b| b.1.cmp(&a.1));

        let debtor_count = debtors.len();
        let creditor_count = creditors.len();

        let mut debtor_remaining: Vec<Decimal> = debtors.iter().map(|d| d.1).collect();
        let mut creditor_remaining: Vec<Decimal> = creditors.iter().map(|c| c.1).collect();

        let mut transfers = Vec::new();
        let mut i = 0; // debtor cursor
        let mut j = 0; // creditor cursor

        while i < debtors.len() && j < creditors.len() {
            let owed = debtor_remaining[i].abs();
            let due = creditor_remaining[j];

            let amount = money::round_minor(owed.min(due));

            if amount > Decimal::ZERO {
                transfers.push(Transfer {
                    from: debtors[i].0.clone(),
                    to: creditors[j].0.clone(),
                    amount,
                });
            }

            debtor_remaining[i] += amount;
            creditor_remaining[j] -= amount;

            // A fully resolved side is advanced even when the
            // tolerance is zero, so the sweep always terminates
            if debtor_remaining[i].is_zero() || debtor_remaining[i].abs() < self.tolerance {
                i += 1;
            }
            if creditor_remaining[j].is_zero() || creditor_remaining[j].abs() < self.tolerance {
                j += 1;
            }
        }

        let total_transferred: Decimal = transfers.iter().map(|t| t.amount).sum();
        let transfer_count = transfers.len();

        SettlementPlan {
            transfers,
            stats: PlanStats {
                member_count: nets.len(),
                debtor_count,
                creditor_count,
                transfer_count,
                total_transferred,
            },
        }
    }
}
