//! Model list filters.

use crate::catalog::{BodyType, Powertrain, VehicleModel};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A predicate over the vehicle model list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ModelFilter {
    /// Filter by brand name (exact, case-insensitive).
    Brand(String),
    /// Filter by body style.
    Body(BodyType),
    /// Filter by powertrain.
    Powertrain(Powertrain),
    /// Filter by base-price bracket.
    Budget {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Substring search over brand, name, and tagline (case-insensitive).
    Text(String),
    /// Only show models in dealer stock.
    InStock,
}

impl ModelFilter {
    /// Create a brand filter.
    pub fn brand(brand: impl Into<String>) -> Self {
        ModelFilter::Brand(brand.into())
    }

    /// Create a body-style filter.
    pub fn body(body: BodyType) -> Self {
        ModelFilter::Body(body)
    }

    /// Create a powertrain filter.
    pub fn powertrain(powertrain: Powertrain) -> Self {
        ModelFilter::Powertrain(powertrain)
    }

    /// Create a budget-bracket filter.
    pub fn budget(min: Option<Money>, max: Option<Money>) -> Self {
        ModelFilter::Budget { min, max }
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        ModelFilter::Text(query.into())
    }

    /// Create an in-stock filter.
    pub fn in_stock() -> Self {
        ModelFilter::InStock
    }

    /// Whether a model passes this filter.
    pub fn matches(&self, model: &VehicleModel) -> bool {
        match self {
            ModelFilter::Brand(brand) => model.brand.eq_ignore_ascii_case(brand),
            ModelFilter::Body(body) => model.body == *body,
            ModelFilter::Powertrain(powertrain) => model.powertrain == *powertrain,
            ModelFilter::Budget { min, max } => {
                let price = model.base_price.amount;
                min.map_or(true, |m| price >= m.amount) && max.map_or(true, |m| price <= m.amount)
            }
            ModelFilter::Text(query) => {
                let query = query.trim().to_lowercase();
                query.is_empty() || model.search_haystack().contains(&query)
            }
            ModelFilter::InStock => model.in_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::tests::demo_models;

    #[test]
    fn test_brand_filter_is_case_insensitive() {
        let models = demo_models();
        let filter = ModelFilter::brand("genesia");
        assert!(models.iter().any(|m| filter.matches(m)));
    }

    #[test]
    fn test_body_filter() {
        let models = demo_models();
        let filter = ModelFilter::body(BodyType::Suv);
        for m in models.iter().filter(|m| filter.matches(m)) {
            assert_eq!(m.body, BodyType::Suv);
        }
    }

    #[test]
    fn test_budget_filter_is_inclusive() {
        let models = demo_models();
        let filter = ModelFilter::budget(
            Some(Money::krw(40_000_000)),
            Some(Money::krw(60_000_000)),
        );
        for m in models.iter().filter(|m| filter.matches(m)) {
            assert!(m.base_price.amount >= 40_000_000);
            assert!(m.base_price.amount <= 60_000_000);
        }
        // Open-ended bracket matches everything on that side.
        let open = ModelFilter::budget(None, None);
        assert!(models.iter().all(|m| open.matches(m)));
    }

    #[test]
    fn test_text_filter_matches_substring() {
        let models = demo_models();
        let filter = ModelFilter::text("GS9");
        assert!(models.iter().any(|m| filter.matches(m)));

        let none = ModelFilter::text("zeppelin");
        assert!(!models.iter().any(|m| none.matches(m)));
    }

    #[test]
    fn test_empty_text_filter_matches_all() {
        let models = demo_models();
        let filter = ModelFilter::text("   ");
        assert!(models.iter().all(|m| filter.matches(m)));
    }

    #[test]
    fn test_in_stock_filter() {
        let models = demo_models();
        let filter = ModelFilter::in_stock();
        for m in models.iter().filter(|m| filter.matches(m)) {
            assert!(m.in_stock);
        }
    }
}
