//! Main settlement engine
//!
//! Composes the netting calculator and the debt solver behind the two
//! call contracts the surrounding application uses: a balances view and
//! a settle-up view. Also builds the synthetic expense that records a
//! settlement payment back through the ordinary expense pipeline.

use crate::{
    config::Config,
    netting::compute_nets,
    solver::DebtSolver,
    types::SettlementPlan,
    Result,
};
use group_core::{Expense, Group, MemberId};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Settlement engine
#[derive(Debug, Clone)]
pub struct SettlementEngine {
    /// Debt solver
    solver: DebtSolver,

    /// Configuration
    config: Config,
}

impl SettlementEngine {
    /// Create new settlement engine
    pub fn new(config: Config) -> Self {
        let solver = DebtSolver::new(config.tolerance);
        Self { solver, config }
    }

    /// Compute the balances view for a group
    ///
    /// Validates every expense at the boundary (fail fast), then nets
    /// them against the group roster.
    pub fn balances(
        &self,
        group: &Group,
        expenses: &[Expense],
    ) -> Result<BTreeMap<MemberId, Decimal>> {
        for expense in expenses {
            expense.validate().map_err(crate::Error::Group)?;
        }

        tracing::info!(
            group = %group.id,
            expenses = expenses.len(),
            members = group.members.len(),
            "computing net balances"
        );

        Ok(compute_nets(expenses, &group.members))
    }

    /// Compute the settle-up view from a net-balance mapping
    ///
    /// The mapping may come from [`Self::balances`] or from any
    /// equivalent balance source.
    pub fn settle_up(&self, nets: &BTreeMap<MemberId, Decimal>) -> SettlementPlan {
        if self.config.check_zero_sum {
            let sum: Decimal = nets.values().sum();
            if sum.abs() > self.config.tolerance {
                tracing::warn!(
                    %sum,
                    "net balances do not sum to zero; plan will not fully settle the group"
                );
            }
        }

        let plan = self.solver.solve_plan(nets);

        tracing::info!(
            transfers = plan.stats.transfer_count,
            total = %plan.stats.total_transferred,
            "settlement plan computed"
        );

        plan
    }

    /// Record a settlement payment as a synthetic expense
    ///
    /// The debtor pays the creditor the transfer amount; fed back
    /// through the expense pipeline this cancels the matching debt.
    pub fn record_settlement(
        &self,
        from: MemberId,
        to: MemberId,
        amount: Decimal,
    ) -> Result<Expense> {
        let expense = Expense::settlement(from, to, amount, &self.config.settlement_tag);
        expense.validate().map_err(crate::Error::Group)?;
        Ok(expense)
    }
}

impl Default for SettlementEngine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use group_core::{Member, Split};

    fn trip_group() -> Group {
        Group::new(
            "trip",
            vec![
                Member::new("a", "Alice"),
                Member::new("b", "Bob"),
                Member::new("c", "Carol"),
                Member::new("d", "Dave"),
            ],
        )
    }

    #[test]
    fn test_balances_then_settle_up() {
        let group = trip_group();
        let expenses = vec![Expense::new(
            "a",
            Decimal::new(3000, 2),
            Split::equal(["a", "b", "c"]),
        )];

        let engine = SettlementEngine::default();
        let nets = engine.balances(&group, &expenses).unwrap();
        let plan = engine.settle_up(&nets);

        assert_eq!(plan.stats.member_count, 4);
        assert_eq!(plan.transfers.len(), 2);
        assert!(plan
            .transfers
            .iter()
            .all(|t| t.to == MemberId::new("a") && t.amount == Decimal::new(1000, 2)));
    }

    #[test]
    fn test_balances_rejects_malformed_expense() {
        let group = trip_group();
        let expenses = vec![Expense::new("a", Decimal::ZERO, Split::equal(["a", "b"]))];

        let engine = SettlementEngine::default();
        assert!(engine.balances(&group, &expenses).is_err());
    }

    #[test]
    fn test_record_settlement_carries_config_tag() {
        let config = Config {
            settlement_tag: "Paid back".to_string(),
            ..Config::default()
        };
        let engine = SettlementEngine::new(config);

        let expense = engine
            .record_settlement(
                MemberId::new("b"),
                MemberId::new("a"),
                Decimal::new(2600, 2),
            )
            .unwrap();

        assert_eq!(expense.description.as_deref(), Some("Paid back"));
        assert_eq!(expense.payer, MemberId::new("b"));
    }

    #[test]
    fn test_record_settlement_rejects_non_positive_amount() {
        let engine = SettlementEngine::default();
        let result =
            engine.record_settlement(MemberId::new("b"), MemberId::new("a"), Decimal::ZERO);
        assert!(result.is_err());
    }

    #[test]
    fn test_recorded_settlements_clear_the_group() {
        let group = trip_group();
        let mut expenses = vec![
            Expense::new("a", Decimal::new(3400, 2), Split::equal(["a", "b", "c", "d"])),
            Expense::new("b", Decimal::new(1000, 2), Split::equal(["c", "d"])),
        ];

        let engine = SettlementEngine::default();
        let nets = engine.balances(&group, &expenses).unwrap();
        let plan = engine.settle_up(&nets);

        for transfer in &plan.transfers {
            let expense = engine
                .record_settlement(transfer.from.clone(), transfer.to.clone(), transfer.amount)
                .unwrap();
            expenses.push(expense);
        }

        let nets = engine.balances(&group, &expenses).unwrap();
        let plan = engine.settle_up(&nets);
        assert!(plan.is_settled());
    }
}
