//! Dealership domain types and logic for Dealer365.
//!
//! This crate provides the non-visual core of the Dealer365 mockup:
//!
//! - **Catalog**: option catalogs, trims, and the vehicle model list
//! - **Configurator**: configuration state, the select/toggle reducer,
//!   the pure price calculator, and view/overlay state
//! - **Search**: model filtering and the comparison selection
//! - **Pipeline**: the deals Kanban board
//! - **Dashboard**: metrics and the simulated refresh
//!
//! # Example
//!
//! ```rust,ignore
//! use dealer_domain::prelude::*;
//!
//! let catalog = demo_catalog();
//! let trim = catalog.trims[0].clone();
//! let mut session = ConfiguratorSession::start(trim, &catalog)?;
//!
//! session.config.select(
//!     SingularCategory::Paint,
//!     &OptionId::new("paint-midnight"),
//!     &catalog,
//! )?;
//! session.config.toggle(
//!     MultiCategory::Accessories,
//!     &OptionId::new("acc-roof-rack"),
//!     &catalog,
//! )?;
//!
//! println!("Total: {}", session.total(&catalog).display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod configurator;
pub mod dashboard;
pub mod pipeline;
pub mod search;

pub use error::DealerError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::DealerError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        BodyType, ConfigOption, ConfiguratorCatalog, MultiCategory, OptionCatalog, OptionKind,
        Powertrain, SingularCategory, Trim, VehicleModel,
    };

    // Configurator
    pub use crate::configurator::{
        total_price, CameraAngle, ConfiguratorSession, PriceBreakdown, VehicleConfiguration,
        ViewState,
    };

    // Search
    pub use crate::search::{ComparisonSelection, ModelFilter, ModelQuery, SortOrder, MAX_COMPARE};

    // Pipeline
    pub use crate::pipeline::{Deal, DealStage, PipelineBoard};

    // Dashboard
    pub use crate::dashboard::{refresh, DashboardMetrics, REFRESH_DELAY};
}
