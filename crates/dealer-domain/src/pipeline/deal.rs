//! Deal and pipeline stage types.

use crate::ids::DealId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stages of the deals pipeline, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DealStage {
    #[default]
    Lead,
    Qualified,
    TestDrive,
    Negotiation,
    Contract,
    Delivered,
}

impl DealStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealStage::Lead => "lead",
            DealStage::Qualified => "qualified",
            DealStage::TestDrive => "test-drive",
            DealStage::Negotiation => "negotiation",
            DealStage::Contract => "contract",
            DealStage::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DealStage::Lead => "Lead",
            DealStage::Qualified => "Qualified",
            DealStage::TestDrive => "Test Drive",
            DealStage::Negotiation => "Negotiation",
            DealStage::Contract => "Contract",
            DealStage::Delivered => "Delivered",
        }
    }

    /// Column number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            DealStage::Lead => 1,
            DealStage::Qualified => 2,
            DealStage::TestDrive => 3,
            DealStage::Negotiation => 4,
            DealStage::Contract => 5,
            DealStage::Delivered => 6,
        }
    }

    /// All stages, in board column order.
    pub fn all() -> [DealStage; 6] {
        [
            DealStage::Lead,
            DealStage::Qualified,
            DealStage::TestDrive,
            DealStage::Negotiation,
            DealStage::Contract,
            DealStage::Delivered,
        ]
    }

    /// The next column, if any.
    pub fn next(&self) -> Option<DealStage> {
        match self {
            DealStage::Lead => Some(DealStage::Qualified),
            DealStage::Qualified => Some(DealStage::TestDrive),
            DealStage::TestDrive => Some(DealStage::Negotiation),
            DealStage::Negotiation => Some(DealStage::Contract),
            DealStage::Contract => Some(DealStage::Delivered),
            DealStage::Delivered => None,
        }
    }

    /// The previous column, if any.
    pub fn previous(&self) -> Option<DealStage> {
        match self {
            DealStage::Lead => None,
            DealStage::Qualified => Some(DealStage::Lead),
            DealStage::TestDrive => Some(DealStage::Qualified),
            DealStage::Negotiation => Some(DealStage::TestDrive),
            DealStage::Contract => Some(DealStage::Negotiation),
            DealStage::Delivered => Some(DealStage::Contract),
        }
    }

    /// Delivered deals no longer count toward the open pipeline value.
    pub fn is_open(&self) -> bool {
        !matches!(self, DealStage::Delivered)
    }
}

/// A deal card on the pipeline board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deal {
    /// Unique deal identifier.
    pub id: DealId,
    /// Customer name.
    pub customer: String,
    /// Model the deal is for (denormalized for display).
    pub model_name: String,
    /// Expected deal value.
    pub value: Money,
    /// Current pipeline stage.
    pub stage: DealStage,
    /// Salesperson note.
    pub note: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last stage change or edit.
    pub updated_at: i64,
}

impl Deal {
    /// Create a new deal in the `Lead` stage.
    pub fn new(customer: impl Into<String>, model_name: impl Into<String>, value: Money) -> Self {
        let now = current_timestamp();
        Self {
            id: DealId::generate(),
            customer: customer.into(),
            model_name: model_name.into(),
            value,
            stage: DealStage::Lead,
            note: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a deal directly in a stage (used by mock seed data).
    pub fn in_stage(
        customer: impl Into<String>,
        model_name: impl Into<String>,
        value: Money,
        stage: DealStage,
    ) -> Self {
        let mut deal = Self::new(customer, model_name, value);
        deal.stage = stage;
        deal
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = current_timestamp();
    }
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order_is_total() {
        let all = DealStage::all();
        for pair in all.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert_eq!(pair[1].previous(), Some(pair[0]));
            assert!(pair[0].number() < pair[1].number());
        }
        assert_eq!(DealStage::Delivered.next(), None);
        assert_eq!(DealStage::Lead.previous(), None);
    }

    #[test]
    fn test_new_deal_starts_as_lead() {
        let deal = Deal::new("Kim Minjun", "GS90", Money::krw(80_000_000));
        assert_eq!(deal.stage, DealStage::Lead);
        assert_eq!(deal.created_at, deal.updated_at);
    }

    #[test]
    fn test_delivered_is_not_open() {
        assert!(DealStage::Negotiation.is_open());
        assert!(!DealStage::Delivered.is_open());
    }
}
