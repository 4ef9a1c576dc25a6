//! The Kanban board over deals.

use crate::error::DealerError;
use crate::ids::DealId;
use crate::money::{Currency, Money};
use crate::pipeline::{Deal, DealStage};
use serde::{Deserialize, Serialize};

/// The deals pipeline board.
///
/// Deals live in one flat list; columns are views filtered by stage, in
/// insertion order. Any stage-to-stage move is allowed except a no-op
/// to the current stage, which the UI treats as a dead drag.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PipelineBoard {
    /// All deals on the board.
    pub deals: Vec<Deal>,
    /// Board currency, used for column totals.
    pub currency: Currency,
}

impl PipelineBoard {
    /// Create an empty board.
    pub fn new(currency: Currency) -> Self {
        Self {
            deals: Vec::new(),
            currency,
        }
    }

    /// Create a board from seed deals.
    pub fn with_deals(currency: Currency, deals: Vec<Deal>) -> Self {
        Self { deals, currency }
    }

    /// Add a deal to the board.
    pub fn add(&mut self, deal: Deal) -> DealId {
        let id = deal.id.clone();
        self.deals.push(deal);
        id
    }

    /// Look up a deal by id.
    pub fn get(&self, id: &DealId) -> Option<&Deal> {
        self.deals.iter().find(|d| &d.id == id)
    }

    /// Move a deal to a stage.
    ///
    /// Returns `DealNotFound` for unknown ids and
    /// `InvalidStageTransition` for a move to the deal's current stage.
    pub fn move_to(&mut self, id: &DealId, stage: DealStage) -> Result<(), DealerError> {
        let deal = self
            .deals
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or_else(|| DealerError::DealNotFound(id.to_string()))?;

        if deal.stage == stage {
            return Err(DealerError::InvalidStageTransition {
                from: deal.stage.as_str().to_string(),
                to: stage.as_str().to_string(),
            });
        }

        deal.stage = stage;
        deal.touch();
        Ok(())
    }

    /// Move a deal one column to the right.
    pub fn advance(&mut self, id: &DealId) -> Result<DealStage, DealerError> {
        let deal = self
            .deals
            .iter()
            .find(|d| &d.id == id)
            .ok_or_else(|| DealerError::DealNotFound(id.to_string()))?;

        let next = deal.stage.next().ok_or_else(|| DealerError::InvalidStageTransition {
            from: deal.stage.as_str().to_string(),
            to: "none".to_string(),
        })?;

        self.move_to(id, next)?;
        Ok(next)
    }

    /// Deals in one column, in insertion order.
    pub fn column(&self, stage: DealStage) -> Vec<&Deal> {
        self.deals.iter().filter(|d| d.stage == stage).collect()
    }

    /// Number of deals in a column.
    pub fn count(&self, stage: DealStage) -> usize {
        self.deals.iter().filter(|d| d.stage == stage).count()
    }

    /// Sum of deal values in one column.
    pub fn stage_total(&self, stage: DealStage) -> Money {
        Money::try_sum(
            self.deals.iter().filter(|d| d.stage == stage).map(|d| &d.value),
            self.currency,
        )
        .unwrap_or(Money::zero(self.currency))
    }

    /// Sum of values across open (not yet delivered) deals.
    pub fn totals(&self) -> Money {
        Money::try_sum(
            self.deals.iter().filter(|d| d.stage.is_open()).map(|d| &d.value),
            self.currency,
        )
        .unwrap_or(Money::zero(self.currency))
    }

    /// Total number of deals on the board.
    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }
}
