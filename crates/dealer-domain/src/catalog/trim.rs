//! Trim types.

use crate::ids::TrimId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable variant of a vehicle model with its own base price.
///
/// A trim is selected once per configurator session and fixed thereafter
/// unless the user restarts the flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trim {
    /// Unique trim identifier.
    pub id: TrimId,
    /// Display name, e.g. "Prestige".
    pub name: String,
    /// Base price before any options.
    pub price: Money,
    /// Short marketing line for the trim picker.
    pub tagline: Option<String>,
}

impl Trim {
    /// Create a new trim.
    pub fn new(id: impl Into<TrimId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            tagline: None,
        }
    }

    /// Attach a tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_creation() {
        let trim = Trim::new("trim-prestige", "Prestige", Money::krw(50_000_000))
            .with_tagline("Every comfort, standard");
        assert_eq!(trim.id.as_str(), "trim-prestige");
        assert_eq!(trim.price.amount, 50_000_000);
        assert!(trim.tagline.is_some());
    }
}
