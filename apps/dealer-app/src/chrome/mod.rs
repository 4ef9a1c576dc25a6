//! Chrome components shared across screens.

mod assistant;
mod header;
mod notifications;
mod search;

pub use assistant::AssistantPanel;
pub use header::Header;
pub use notifications::NotificationsMenu;
pub use search::SearchBar;
