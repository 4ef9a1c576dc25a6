//! In-memory mock datasets driving every screen.

mod catalogs;
mod deals;
mod models;
mod notifications;

pub use catalogs::configurator_catalog;
pub use deals::seed_board;
pub use models::{brands, vehicle_models, BUDGET_BRACKETS};
pub use notifications::{seed_notifications, Notification};

use dealer_domain::prelude::*;

/// The dashboard's current metrics snapshot.
pub fn dashboard_metrics() -> DashboardMetrics {
    DashboardMetrics {
        monthly_revenue: Money::krw(1_243_500_000),
        vehicles_sold: 23,
        active_deals: 41,
        conversion_rate: 0.235,
        inventory_count: 67,
        revenue_delta_pct: 4.2,
    }
}
