//! Config option and option catalog types.

use crate::ids::OptionId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Classification of a purchasable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OptionKind {
    /// Bundle of features sold together.
    #[default]
    Package,
    /// Exterior paint color.
    Color,
    /// Wheel design.
    Wheel,
    /// Interior material or trim finish.
    Interior,
    /// Standalone accessory (roof rack, mats, etc.).
    Accessory,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Package => "package",
            OptionKind::Color => "color",
            OptionKind::Wheel => "wheel",
            OptionKind::Interior => "interior",
            OptionKind::Accessory => "accessory",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "package" => Some(OptionKind::Package),
            "color" => Some(OptionKind::Color),
            "wheel" => Some(OptionKind::Wheel),
            "interior" => Some(OptionKind::Interior),
            "accessory" => Some(OptionKind::Accessory),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OptionKind::Package => "Package",
            OptionKind::Color => "Color",
            OptionKind::Wheel => "Wheels",
            OptionKind::Interior => "Interior",
            OptionKind::Accessory => "Accessory",
        }
    }
}

/// A purchasable option from a static catalog.
///
/// Options are immutable; the price is the delta added on top of the
/// trim's base price when selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigOption {
    /// Unique option identifier.
    pub id: OptionId,
    /// Display name.
    pub name: String,
    /// Price delta, non-negative.
    pub price: Money,
    /// Option classification.
    pub kind: OptionKind,
    /// Longer description for detail panels.
    pub description: Option<String>,
    /// Presentation value, e.g. a hex color for paints.
    pub value: Option<String>,
}

impl ConfigOption {
    /// Create a new option with no description or value.
    pub fn new(
        id: impl Into<OptionId>,
        name: impl Into<String>,
        price: Money,
        kind: OptionKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            kind,
            description: None,
            value: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a presentation value (e.g. "#0b1d3a" for a paint swatch).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Whether selecting this option adds nothing to the total.
    pub fn is_included(&self) -> bool {
        self.price.is_zero()
    }
}

/// A static, enumerable list of options for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OptionCatalog {
    /// Category label, e.g. "engines".
    pub category: String,
    /// Options in curated display order.
    pub options: Vec<ConfigOption>,
}

impl OptionCatalog {
    /// Create a catalog from a list of options.
    pub fn new(category: impl Into<String>, options: Vec<ConfigOption>) -> Self {
        Self {
            category: category.into(),
            options,
        }
    }

    /// Look up an option by id.
    pub fn get(&self, id: &OptionId) -> Option<&ConfigOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    /// Whether the catalog contains the id.
    pub fn contains(&self, id: &OptionId) -> bool {
        self.get(id).is_some()
    }

    /// The first option, used as the default selection.
    pub fn first(&self) -> Option<&ConfigOption> {
        self.options.first()
    }

    /// Iterate options in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paint_catalog() -> OptionCatalog {
        OptionCatalog::new(
            "paints",
            vec![
                ConfigOption::new("paint-snow", "Snow White Pearl", Money::krw(0), OptionKind::Color)
                    .with_value("#f4f6f8"),
                ConfigOption::new(
                    "paint-midnight",
                    "Midnight Blue",
                    Money::krw(800_000),
                    OptionKind::Color,
                )
                .with_value("#0b1d3a"),
            ],
        )
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = paint_catalog();
        let opt = catalog.get(&OptionId::new("paint-midnight")).unwrap();
        assert_eq!(opt.name, "Midnight Blue");
        assert_eq!(opt.price.amount, 800_000);
    }

    #[test]
    fn test_catalog_lookup_missing() {
        let catalog = paint_catalog();
        assert!(catalog.get(&OptionId::new("paint-nonexistent")).is_none());
        assert!(!catalog.contains(&OptionId::new("paint-nonexistent")));
    }

    #[test]
    fn test_catalog_first_is_default() {
        let catalog = paint_catalog();
        assert_eq!(catalog.first().unwrap().id.as_str(), "paint-snow");
    }

    #[test]
    fn test_included_option() {
        let catalog = paint_catalog();
        assert!(catalog.first().unwrap().is_included());
    }

    #[test]
    fn test_option_kind_round_trip() {
        assert_eq!(OptionKind::from_str("accessory"), Some(OptionKind::Accessory));
        assert_eq!(OptionKind::from_str(OptionKind::Wheel.as_str()), Some(OptionKind::Wheel));
        assert_eq!(OptionKind::from_str("unknown"), None);
    }
}
