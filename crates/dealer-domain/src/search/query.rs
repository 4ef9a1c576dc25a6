//! Model query: filter conjunction plus ordering.

use crate::catalog::VehicleModel;
use crate::search::ModelFilter;
use serde::{Deserialize, Serialize};

/// Result ordering for the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Curated input order.
    #[default]
    Featured,
    /// Base price, low to high.
    PriceAsc,
    /// Base price, high to low.
    PriceDesc,
    /// Name A-Z.
    NameAsc,
}

impl SortOrder {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Featured => "Featured",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
            SortOrder::NameAsc => "Name: A-Z",
        }
    }

    /// All sort orders, in dropdown order.
    pub fn all() -> [SortOrder; 4] {
        [
            SortOrder::Featured,
            SortOrder::PriceAsc,
            SortOrder::PriceDesc,
            SortOrder::NameAsc,
        ]
    }
}

/// A query over the model list: every filter must pass.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModelQuery {
    /// Filters, applied as a conjunction.
    pub filters: Vec<ModelFilter>,
    /// Result ordering.
    pub sort: SortOrder,
}

impl ModelQuery {
    /// Create an empty query that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: ModelFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a text filter unless the query string is blank.
    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        if !query.trim().is_empty() {
            self.filters.push(ModelFilter::Text(query));
        }
        self
    }

    /// Set the result ordering.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Whether a model passes every filter.
    pub fn matches(&self, model: &VehicleModel) -> bool {
        self.filters.iter().all(|f| f.matches(model))
    }

    /// Apply the query to a model list.
    ///
    /// Filtering preserves input order; `Featured` keeps it, other sort
    /// orders reorder the filtered result stably.
    pub fn apply(&self, models: &[VehicleModel]) -> Vec<VehicleModel> {
        let mut result: Vec<VehicleModel> =
            models.iter().filter(|m| self.matches(m)).cloned().collect();

        match self.sort {
            SortOrder::Featured => {}
            SortOrder::PriceAsc => result.sort_by_key(|m| m.base_price.amount),
            SortOrder::PriceDesc => result.sort_by_key(|m| std::cmp::Reverse(m.base_price.amount)),
            SortOrder::NameAsc => result.sort_by(|a, b| a.name.cmp(&b.name)),
        }
        result
    }
}
