//! Notifications shown in the header menu.

use serde::{Deserialize, Serialize};

/// One notification in the header menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub read: bool,
}

impl Notification {
    fn new(id: &str, title: &str, body: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            read: false,
        }
    }
}

/// Seed notifications, newest first.
pub fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification::new(
            "ntf-testdrive",
            "Test drive booked",
            "Jung Woojin booked a Stinger GT drive for Saturday 10:00",
        ),
        Notification::new(
            "ntf-stock",
            "Stock arrival",
            "Two Evo 6 units arrived at the Gangnam lot",
        ),
        Notification::new(
            "ntf-contract",
            "Contract signed",
            "Yoon Sua signed for an Evo 9, delivery scheduling open",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_notifications_start_unread() {
        let seeds = seed_notifications();
        assert!(!seeds.is_empty());
        assert!(seeds.iter().all(|n| !n.read));
    }
}
