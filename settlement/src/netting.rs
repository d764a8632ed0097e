//! Netting calculator
//!
//! Folds a list of expense records into a signed net balance per roster
//! member. Positive means the group owes the member, negative means the
//! member owes the group.
//!
//! # Algorithm
//!
//! For each expense, in input order:
//!
//! 1. Credit the payer the full amount advanced
//! 2. Resolve participants and weights from the split
//! 3. Debit each participant `total * weight / total_weight`
//!
//! No rounding happens here; precision is preserved until the solver
//! rounds for comparison and output.
//!
//! # Example
//!
//! ```text
//! Expense: A pays 30.00, split equally among A, B, C
//!
//! Nets:
//!   A: +30.00 − 10.00 = +20.00
//!   B: −10.00
//!   C: −10.00
//! ```

use group_core::{Expense, Member, MemberId};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Compute per-member net balances from expense records
///
/// Every roster member starts at zero, so settled members appear in the
/// result. Ids referenced by an expense but absent from the roster are
/// dropped silently; their share is not redistributed. The returned map
/// is ordered by member id so downstream iteration is deterministic.
pub fn compute_nets(
    expenses: &[Expense],
    members: &[Member],
) -> BTreeMap<MemberId, Decimal> {
    let mut nets: BTreeMap<MemberId, Decimal> = members
        .iter()
        .map(|m| (m.id.clone(), Decimal::ZERO))
        .collect();

    for expense in expenses {
        // Payer gets credit for the full amount paid
        if let Some(balance) = nets.get_mut(&expense.payer) {
            *balance += expense.total;
        } else {
            tracing::debug!(payer = %expense.payer, "payer not on roster, credit dropped");
        }

        let total_weight = expense.split.total_weight();

        // Empty participant list: nothing to deduct
        if total_weight == Decimal::ZERO {
            continue;
        }

        for (member, weight) in expense.split.shares() {
            let share = expense.total * weight / total_weight;
            if let Some(balance) = nets.get_mut(member) {
                *balance -= share;
            } else {
                tracing::debug!(member = %member, "participant not on roster, share dropped");
            }
        }
    }

    nets
}
