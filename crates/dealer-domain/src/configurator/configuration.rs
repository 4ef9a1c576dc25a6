//! The configuration record and its reducer operations.

use crate::catalog::{ConfigOption, ConfiguratorCatalog, MultiCategory, SingularCategory};
use crate::error::DealerError;
use crate::ids::OptionId;
use serde::{Deserialize, Serialize};

/// The full set of a buyer's selected options for a given trim.
///
/// Singular categories hold the selected option itself; set-valued
/// categories hold ids resolved against their catalog at pricing time.
/// The id vectors behave as sets: toggling inserts an absent id and
/// removes a present one, preserving first-insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleConfiguration {
    pub engine: ConfigOption,
    pub transmission: ConfigOption,
    pub paint: ConfigOption,
    pub wheels: ConfigOption,
    pub upholstery: ConfigOption,
    pub interior_trim: ConfigOption,
    pub packages: Vec<OptionId>,
    pub accessories: Vec<OptionId>,
}

impl VehicleConfiguration {
    /// Start from the first option of every singular category.
    ///
    /// Returns `EmptyCategory` if any singular category has no options.
    pub fn defaults(catalog: &ConfiguratorCatalog) -> Result<Self, DealerError> {
        let default_for = |category: SingularCategory| -> Result<ConfigOption, DealerError> {
            catalog
                .singular(category)
                .first()
                .cloned()
                .ok_or_else(|| DealerError::EmptyCategory(category.as_str().to_string()))
        };

        Ok(Self {
            engine: default_for(SingularCategory::Engine)?,
            transmission: default_for(SingularCategory::Transmission)?,
            paint: default_for(SingularCategory::Paint)?,
            wheels: default_for(SingularCategory::Wheels)?,
            upholstery: default_for(SingularCategory::Upholstery)?,
            interior_trim: default_for(SingularCategory::InteriorTrim)?,
            packages: Vec::new(),
            accessories: Vec::new(),
        })
    }

    /// Replace the selection for an exclusive category.
    ///
    /// Returns `OptionNotFound` if the id is absent from the category's
    /// catalog; the configuration is left unchanged in that case.
    pub fn select(
        &mut self,
        category: SingularCategory,
        option_id: &OptionId,
        catalog: &ConfiguratorCatalog,
    ) -> Result<(), DealerError> {
        let option = catalog
            .singular(category)
            .get(option_id)
            .cloned()
            .ok_or_else(|| DealerError::OptionNotFound {
                category: category.as_str().to_string(),
                id: option_id.to_string(),
            })?;

        *self.singular_mut(category) = option;
        Ok(())
    }

    /// Insert or remove an id in a set-valued category.
    ///
    /// Returns whether the id is selected after the toggle. Unknown ids
    /// are rejected with `OptionNotFound` so that every id held by the
    /// configuration resolves against its catalog.
    pub fn toggle(
        &mut self,
        category: MultiCategory,
        option_id: &OptionId,
        catalog: &ConfiguratorCatalog,
    ) -> Result<bool, DealerError> {
        if !catalog.multi(category).contains(option_id) {
            return Err(DealerError::OptionNotFound {
                category: category.as_str().to_string(),
                id: option_id.to_string(),
            });
        }

        let ids = self.multi_mut(category);
        if let Some(pos) = ids.iter().position(|id| id == option_id) {
            ids.remove(pos);
            Ok(false)
        } else {
            ids.push(option_id.clone());
            Ok(true)
        }
    }

    /// The current selection for an exclusive category.
    pub fn singular(&self, category: SingularCategory) -> &ConfigOption {
        match category {
            SingularCategory::Engine => &self.engine,
            SingularCategory::Transmission => &self.transmission,
            SingularCategory::Paint => &self.paint,
            SingularCategory::Wheels => &self.wheels,
            SingularCategory::Upholstery => &self.upholstery,
            SingularCategory::InteriorTrim => &self.interior_trim,
        }
    }

    fn singular_mut(&mut self, category: SingularCategory) -> &mut ConfigOption {
        match category {
            SingularCategory::Engine => &mut self.engine,
            SingularCategory::Transmission => &mut self.transmission,
            SingularCategory::Paint => &mut self.paint,
            SingularCategory::Wheels => &mut self.wheels,
            SingularCategory::Upholstery => &mut self.upholstery,
            SingularCategory::InteriorTrim => &mut self.interior_trim,
        }
    }

    /// The selected ids of a set-valued category, in first-insertion order.
    pub fn selected(&self, category: MultiCategory) -> &[OptionId] {
        match category {
            MultiCategory::Packages => &self.packages,
            MultiCategory::Accessories => &self.accessories,
        }
    }

    fn multi_mut(&mut self, category: MultiCategory) -> &mut Vec<OptionId> {
        match category {
            MultiCategory::Packages => &mut self.packages,
            MultiCategory::Accessories => &mut self.accessories,
        }
    }

    /// Whether an id is selected in a set-valued category.
    pub fn is_selected(&self, category: MultiCategory, option_id: &OptionId) -> bool {
        self.selected(category).iter().any(|id| id == option_id)
    }

    /// Every selection, singular then multi, for the summary drawer.
    ///
    /// Multi ids that no longer resolve against their catalog are skipped.
    pub fn selected_options<'a>(&'a self, catalog: &'a ConfiguratorCatalog) -> Vec<&'a ConfigOption> {
        let mut out: Vec<&ConfigOption> = SingularCategory::all()
            .into_iter()
            .map(|c| self.singular(c))
            .collect();
        for category in MultiCategory::all() {
            let options = catalog.multi(category);
            out.extend(self.selected(category).iter().filter_map(|id| options.get(id)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configurator::tests::demo_catalog;

    #[test]
    fn test_defaults_take_first_of_each_category() {
        let catalog = demo_catalog();
        let config = VehicleConfiguration::defaults(&catalog).unwrap();
        assert_eq!(config.engine.id, catalog.engines.first().unwrap().id);
        assert_eq!(config.paint.id, catalog.paints.first().unwrap().id);
        assert!(config.packages.is_empty());
        assert!(config.accessories.is_empty());
    }

    #[test]
    fn test_defaults_fail_on_empty_category() {
        let mut catalog = demo_catalog();
        catalog.wheels.options.clear();
        assert!(matches!(
            VehicleConfiguration::defaults(&catalog),
            Err(DealerError::EmptyCategory(c)) if c == "wheels"
        ));
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let catalog = demo_catalog();
        let mut config = VehicleConfiguration::defaults(&catalog).unwrap();

        config
            .select(SingularCategory::Paint, &OptionId::new("paint-midnight"), &catalog)
            .unwrap();
        assert_eq!(config.paint.id.as_str(), "paint-midnight");

        config
            .select(SingularCategory::Paint, &OptionId::new("paint-snow"), &catalog)
            .unwrap();
        assert_eq!(config.paint.id.as_str(), "paint-snow");
    }

    #[test]
    fn test_select_unknown_id_leaves_config_unchanged() {
        let catalog = demo_catalog();
        let mut config = VehicleConfiguration::defaults(&catalog).unwrap();
        let before = config.clone();

        let result = config.select(
            SingularCategory::Engine,
            &OptionId::new("engine-ghost"),
            &catalog,
        );
        assert!(matches!(result, Err(DealerError::OptionNotFound { .. })));
        assert_eq!(config, before);
    }

    #[test]
    fn test_toggle_inserts_then_removes() {
        let catalog = demo_catalog();
        let mut config = VehicleConfiguration::defaults(&catalog).unwrap();
        let id = OptionId::new("acc-roof-rack");

        assert!(config.toggle(MultiCategory::Accessories, &id, &catalog).unwrap());
        assert!(config.is_selected(MultiCategory::Accessories, &id));

        assert!(!config.toggle(MultiCategory::Accessories, &id, &catalog).unwrap());
        assert!(!config.is_selected(MultiCategory::Accessories, &id));
    }

    #[test]
    fn test_double_toggle_restores_original_set() {
        let catalog = demo_catalog();
        let mut config = VehicleConfiguration::defaults(&catalog).unwrap();
        let id = OptionId::new("acc-dashcam");

        let before = config.accessories.clone();
        config.toggle(MultiCategory::Accessories, &id, &catalog).unwrap();
        config.toggle(MultiCategory::Accessories, &id, &catalog).unwrap();
        assert_eq!(config.accessories, before);
    }

    #[test]
    fn test_toggle_unknown_id_is_rejected() {
        let catalog = demo_catalog();
        let mut config = VehicleConfiguration::defaults(&catalog).unwrap();
        let result = config.toggle(
            MultiCategory::Packages,
            &OptionId::new("pkg-ghost"),
            &catalog,
        );
        assert!(matches!(result, Err(DealerError::OptionNotFound { .. })));
        assert!(config.packages.is_empty());
    }

    #[test]
    fn test_toggle_preserves_insertion_order() {
        let catalog = demo_catalog();
        let mut config = VehicleConfiguration::defaults(&catalog).unwrap();
        let rack = OptionId::new("acc-roof-rack");
        let cam = OptionId::new("acc-dashcam");
        let mats = OptionId::new("acc-floor-mats");

        config.toggle(MultiCategory::Accessories, &rack, &catalog).unwrap();
        config.toggle(MultiCategory::Accessories, &cam, &catalog).unwrap();
        config.toggle(MultiCategory::Accessories, &mats, &catalog).unwrap();
        config.toggle(MultiCategory::Accessories, &cam, &catalog).unwrap();

        assert_eq!(config.accessories, vec![rack, mats]);
    }

    #[test]
    fn test_selected_options_summary() {
        let catalog = demo_catalog();
        let mut config = VehicleConfiguration::defaults(&catalog).unwrap();
        config
            .toggle(MultiCategory::Accessories, &OptionId::new("acc-roof-rack"), &catalog)
            .unwrap();

        let summary = config.selected_options(&catalog);
        // Six singular selections plus one accessory.
        assert_eq!(summary.len(), 7);
        assert!(summary.iter().any(|o| o.id.as_str() == "acc-roof-rack"));
    }
}
