//! Core types for the group domain model
//!
//! All types are designed for:
//! - Deterministic iteration (ordered member identifiers)
//! - Exact arithmetic (Decimal for money and weights)
//! - Tagged split representation (no runtime shape-sniffing)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{Error, Result};

/// Member identifier, opaque to the engine
///
/// Identity is the id; the display name on [`Member`] is presentational
/// only and never consulted by the netting or settlement algorithms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemberId(String);

impl MemberId {
    /// Create new member ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Group member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Member ID
    pub id: MemberId,

    /// Display name (presentational only)
    pub name: String,
}

impl Member {
    /// Create new member
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(id),
            name: name.into(),
        }
    }
}

/// Expense-sharing group
///
/// Carries only what the engine reads: the roster. Authentication,
/// persistence and group administration live outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Group ID
    pub id: Uuid,

    /// Group name
    pub name: String,

    /// Member roster
    pub members: Vec<Member>,
}

impl Group {
    /// Create new group with a roster
    pub fn new(name: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            members,
        }
    }

    /// Iterate over roster member IDs
    pub fn member_ids(&self) -> impl Iterator<Item = &MemberId> {
        self.members.iter().map(|m| &m.id)
    }

    /// Check whether an ID is on the roster
    pub fn contains(&self, id: &MemberId) -> bool {
        self.members.iter().any(|m| &m.id == id)
    }

    /// Look up a member's display name
    pub fn member_name(&self, id: &MemberId) -> Option<&str> {
        self.members
            .iter()
            .find(|m| &m.id == id)
            .map(|m| m.name.as_str())
    }
}

fn default_weight() -> Decimal {
    Decimal::ONE
}

/// One participant's share of a weighted split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitShare {
    /// Participant member ID
    pub member: MemberId,

    /// Relative weight (defaults to 1 when omitted)
    #[serde(default = "default_weight")]
    pub weight: Decimal,
}

impl SplitShare {
    /// Create new share
    pub fn new(member: impl Into<String>, weight: Decimal) -> Self {
        Self {
            member: MemberId::new(member),
            weight,
        }
    }
}

/// How an expense is divided among participants
///
/// Tagged union: either an equal split over a list of member IDs
/// (weight 1 each) or explicit weighted shares.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Split {
    /// Equal split among the named members
    Equal {
        /// Participant member IDs
        members: Vec<MemberId>,
    },
    /// Weighted split with explicit shares
    Weighted {
        /// Participant shares
        shares: Vec<SplitShare>,
    },
}

impl Split {
    /// Equal split over the given member IDs
    pub fn equal<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Split::Equal {
            members: members.into_iter().map(MemberId::new).collect(),
        }
    }

    /// Weighted split from explicit shares
    pub fn weighted(shares: Vec<SplitShare>) -> Self {
        Split::Weighted { shares }
    }

    /// Resolve to (member, weight) pairs
    pub fn shares(&self) -> Vec<(&MemberId, Decimal)> {
        match self {
            Split::Equal { members } => {
                members.iter().map(|m| (m, Decimal::ONE)).collect()
            }
            Split::Weighted { shares } => {
                shares.iter().map(|s| (&s.member, s.weight)).collect()
            }
        }
    }

    /// Sum of participant weights
    pub fn total_weight(&self) -> Decimal {
        self.shares().iter().map(|(_, w)| *w).sum()
    }
}

/// Expense record: a payment advanced by one member on behalf of many
///
/// Settlement payments are recorded through the same shape (see
/// [`Expense::settlement`]) rather than as a distinct ledger entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID
    pub id: Uuid,

    /// Member who paid
    pub payer: MemberId,

    /// Total amount paid (> 0)
    pub total: Decimal,

    /// How the total is divided
    pub split: Split,

    /// Free-text description
    pub description: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create new expense
    pub fn new(payer: impl Into<String>, total: Decimal, split: Split) -> Self {
        Self {
            id: Uuid::new_v4(),
            payer: MemberId::new(payer),
            total,
            split,
            description: None,
            created_at: Utc::now(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Synthetic expense recording a settlement payment
    ///
    /// The debtor pays the full amount and the creditor is the sole
    /// participant, which cancels the matching debt once fed back
    /// through the netting step.
    pub fn settlement(
        from: MemberId,
        to: MemberId,
        amount: Decimal,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            payer: from,
            total: amount,
            split: Split::Equal { members: vec![to] },
            description: Some(tag.into()),
            created_at: Utc::now(),
        }
    }

    /// Boundary validation: fail fast on malformed records
    ///
    /// Unknown roster references are deliberately not checked here; the
    /// netting step drops them silently.
    pub fn validate(&self) -> Result<()> {
        if self.total <= Decimal::ZERO {
            return Err(Error::InvalidExpense(format!(
                "total must be positive, got {}",
                self.total
            )));
        }

        if self.payer.as_str().is_empty() {
            return Err(Error::InvalidExpense("payer id is empty".to_string()));
        }

        for (member, weight) in self.split.shares() {
            if member.as_str().is_empty() {
                return Err(Error::InvalidExpense(
                    "participant id is empty".to_string(),
                ));
            }
            if weight < Decimal::ZERO {
                return Err(Error::InvalidExpense(format!(
                    "negative weight {} for participant {}",
                    weight, member
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_id_display() {
        let id = MemberId::new("alice");
        assert_eq!(id.as_str(), "alice");
        assert_eq!(id.to_string(), "alice");
    }

    #[test]
    fn test_group_roster() {
        let group = Group::new(
            "flat",
            vec![Member::new("a", "Alice"), Member::new("b", "Bob")],
        );

        assert!(group.contains(&MemberId::new("a")));
        assert!(!group.contains(&MemberId::new("z")));
        assert_eq!(group.member_name(&MemberId::new("b")), Some("Bob"));
        assert_eq!(group.member_ids().count(), 2);
    }

    #[test]
    fn test_equal_split_shares() {
        let split = Split::equal(["a", "b", "c"]);

        let shares = split.shares();
        assert_eq!(shares.len(), 3);
        assert!(shares.iter().all(|(_, w)| *w == Decimal::ONE));
        assert_eq!(split.total_weight(), Decimal::new(3, 0));
    }

    #[test]
    fn test_weighted_split_total_weight() {
        let split = Split::weighted(vec![
            SplitShare::new("a", Decimal::ONE),
            SplitShare::new("b", Decimal::new(3, 0)),
        ]);

        assert_eq!(split.total_weight(), Decimal::new(4, 0));
    }

    #[test]
    fn test_weight_defaults_to_one_in_serialized_form() {
        let json = r#"{"type":"weighted","shares":[{"member":"a"},{"member":"b","weight":"2"}]}"#;
        let split: Split = serde_json::from_str(json).unwrap();

        let shares = split.shares();
        assert_eq!(shares[0].1, Decimal::ONE);
        assert_eq!(shares[1].1, Decimal::new(2, 0));
    }

    #[test]
    fn test_validate_rejects_non_positive_total() {
        let expense = Expense::new("a", Decimal::ZERO, Split::equal(["a", "b"]));
        assert!(expense.validate().is_err());

        let expense = Expense::new("a", Decimal::new(-100, 2), Split::equal(["a", "b"]));
        assert!(expense.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let expense = Expense::new(
            "a",
            Decimal::new(1000, 2),
            Split::weighted(vec![SplitShare::new("b", Decimal::new(-1, 0))]),
        );
        assert!(expense.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_empty_participant_list() {
        // Empty split means no shares are deducted, not an error
        let expense = Expense::new("a", Decimal::new(1000, 2), Split::equal(Vec::<String>::new()));
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_settlement_expense_shape() {
        let expense = Expense::settlement(
            MemberId::new("debtor"),
            MemberId::new("creditor"),
            Decimal::new(2600, 2),
            "Settlement",
        );

        assert_eq!(expense.payer.as_str(), "debtor");
        assert_eq!(expense.total, Decimal::new(2600, 2));
        assert_eq!(expense.description.as_deref(), Some("Settlement"));
        match &expense.split {
            Split::Equal { members } => {
                assert_eq!(members, &vec![MemberId::new("creditor")]);
            }
            Split::Weighted { .. } => panic!("settlement must be an equal split"),
        }
        assert!(expense.validate().is_ok());
    }
}
