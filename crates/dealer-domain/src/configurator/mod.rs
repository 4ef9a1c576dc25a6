//! Configuration state, the select/toggle reducer, pricing, and view state.

mod configuration;
mod pricing;
mod view;

pub use configuration::VehicleConfiguration;
pub use pricing::{breakdown, total_price, PriceBreakdown, PriceLine};
pub use view::{CameraAngle, ViewState};

use crate::catalog::{ConfiguratorCatalog, Trim};
use crate::error::DealerError;
use crate::ids::SessionId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One active configurator flow: a fixed trim, the buyer's selections,
/// and the preview's view state. Discarded when the session ends; there
/// is no persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfiguratorSession {
    /// Session identifier for logging and UI keys.
    pub id: SessionId,
    /// The chosen trim, fixed for the life of the session.
    pub trim: Trim,
    /// The buyer's selections.
    pub config: VehicleConfiguration,
    /// Price-irrelevant preview state.
    pub view: ViewState,
}

impl ConfiguratorSession {
    /// Start a session on a trim with every singular category defaulted
    /// to the first option of its catalog.
    pub fn start(trim: Trim, catalog: &ConfiguratorCatalog) -> Result<Self, DealerError> {
        Ok(Self {
            id: SessionId::generate(),
            trim,
            config: VehicleConfiguration::defaults(catalog)?,
            view: ViewState::default(),
        })
    }

    /// Restart the flow on a new trim: selections and view state reset.
    pub fn restart(&mut self, trim: Trim, catalog: &ConfiguratorCatalog) -> Result<(), DealerError> {
        self.trim = trim;
        self.config = VehicleConfiguration::defaults(catalog)?;
        self.view = ViewState::default();
        Ok(())
    }

    /// Current total price of the session.
    pub fn total(&self, catalog: &ConfiguratorCatalog) -> Money {
        total_price(&self.config, &self.trim, catalog)
    }

    /// Current itemized breakdown.
    pub fn breakdown(&self, catalog: &ConfiguratorCatalog) -> PriceBreakdown {
        breakdown(&self.config, &self.trim, catalog)
    }
}
