//! Comparison selection for the side-by-side screen.

use crate::ids::ModelId;
use serde::{Deserialize, Serialize};

/// Maximum number of models in a comparison.
pub const MAX_COMPARE: usize = 3;

/// The set of models picked for side-by-side comparison.
///
/// Holds at most [`MAX_COMPARE`] ids in pick order; toggling a present
/// id removes it, toggling a new id onto a full selection is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ComparisonSelection {
    ids: Vec<ModelId>,
}

impl ComparisonSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a model in or out. Returns whether the id is selected
    /// after the call.
    pub fn toggle(&mut self, id: ModelId) -> bool {
        if let Some(pos) = self.ids.iter().position(|i| i == &id) {
            self.ids.remove(pos);
            false
        } else if self.ids.len() < MAX_COMPARE {
            self.ids.push(id);
            true
        } else {
            false
        }
    }

    /// Whether a model is selected.
    pub fn contains(&self, id: &ModelId) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Selected ids in pick order.
    pub fn ids(&self) -> &[ModelId] {
        &self.ids
    }

    /// Whether another model can still be added.
    pub fn has_room(&self) -> bool {
        self.ids.len() < MAX_COMPARE
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Remove every selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
