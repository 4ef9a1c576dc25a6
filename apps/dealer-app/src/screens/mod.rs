//! The application's screens, one module per route.

mod compare;
mod configurator;
mod dashboard;
mod models;
mod pipeline;

pub use compare::CompareScreen;
pub use configurator::ConfiguratorScreen;
pub use dashboard::DashboardScreen;
pub use models::ModelsScreen;
pub use pipeline::PipelineScreen;
