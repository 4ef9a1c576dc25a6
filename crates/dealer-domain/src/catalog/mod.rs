//! Static option catalogs, trims, and the vehicle model list.

mod model;
mod option;
mod trim;

pub use model::{BodyType, Powertrain, VehicleModel};
pub use option::{ConfigOption, OptionCatalog, OptionKind};
pub use trim::Trim;

use crate::error::DealerError;
use crate::ids::TrimId;
use serde::{Deserialize, Serialize};

/// Exclusive categories: selecting an option replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SingularCategory {
    Engine,
    Transmission,
    Paint,
    Wheels,
    Upholstery,
    InteriorTrim,
}

impl SingularCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SingularCategory::Engine => "engine",
            SingularCategory::Transmission => "transmission",
            SingularCategory::Paint => "paint",
            SingularCategory::Wheels => "wheels",
            SingularCategory::Upholstery => "upholstery",
            SingularCategory::InteriorTrim => "interior-trim",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SingularCategory::Engine => "Engine",
            SingularCategory::Transmission => "Transmission",
            SingularCategory::Paint => "Paint",
            SingularCategory::Wheels => "Wheels",
            SingularCategory::Upholstery => "Upholstery",
            SingularCategory::InteriorTrim => "Interior Trim",
        }
    }

    /// All singular categories, in configurator panel order.
    pub fn all() -> [SingularCategory; 6] {
        [
            SingularCategory::Engine,
            SingularCategory::Transmission,
            SingularCategory::Paint,
            SingularCategory::Wheels,
            SingularCategory::Upholstery,
            SingularCategory::InteriorTrim,
        ]
    }
}

/// Set-valued categories: selecting an option toggles it in or out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultiCategory {
    Packages,
    Accessories,
}

impl MultiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MultiCategory::Packages => "packages",
            MultiCategory::Accessories => "accessories",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MultiCategory::Packages => "Packages",
            MultiCategory::Accessories => "Accessories",
        }
    }

    /// All multi-select categories, in configurator panel order.
    pub fn all() -> [MultiCategory; 2] {
        [MultiCategory::Packages, MultiCategory::Accessories]
    }
}

/// The full set of catalogs backing one configurator flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ConfiguratorCatalog {
    /// Purchasable trims, in display order.
    pub trims: Vec<Trim>,
    pub engines: OptionCatalog,
    pub transmissions: OptionCatalog,
    pub paints: OptionCatalog,
    pub wheels: OptionCatalog,
    pub upholstery: OptionCatalog,
    pub interior_trims: OptionCatalog,
    pub packages: OptionCatalog,
    pub accessories: OptionCatalog,
}

impl ConfiguratorCatalog {
    /// The catalog backing an exclusive category.
    pub fn singular(&self, category: SingularCategory) -> &OptionCatalog {
        match category {
            SingularCategory::Engine => &self.engines,
            SingularCategory::Transmission => &self.transmissions,
            SingularCategory::Paint => &self.paints,
            SingularCategory::Wheels => &self.wheels,
            SingularCategory::Upholstery => &self.upholstery,
            SingularCategory::InteriorTrim => &self.interior_trims,
        }
    }

    /// The catalog backing a set-valued category.
    pub fn multi(&self, category: MultiCategory) -> &OptionCatalog {
        match category {
            MultiCategory::Packages => &self.packages,
            MultiCategory::Accessories => &self.accessories,
        }
    }

    /// Look up a trim by id.
    pub fn trim(&self, id: &TrimId) -> Result<&Trim, DealerError> {
        self.trims
            .iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| DealerError::TrimNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_trim_lookup() {
        let catalog = ConfiguratorCatalog {
            trims: vec![Trim::new("trim-base", "Base", Money::krw(40_000_000))],
            ..Default::default()
        };
        assert!(catalog.trim(&TrimId::new("trim-base")).is_ok());
        assert!(matches!(
            catalog.trim(&TrimId::new("trim-ghost")),
            Err(DealerError::TrimNotFound(_))
        ));
    }

    #[test]
    fn test_singular_accessor_covers_all_categories() {
        let catalog = ConfiguratorCatalog::default();
        for category in SingularCategory::all() {
            // Default catalogs are empty but every arm must resolve.
            assert!(catalog.singular(category).is_empty());
        }
    }
}
