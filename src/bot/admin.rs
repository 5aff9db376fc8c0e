use dashmap::DashSet;
use poise::serenity_prelude::{Http, UserId};
use tracing::warn;

use crate::locale;

/// Concurrency-safe set of accounts that receive relayed feedback.
///
/// Seeded from configuration at startup and mutated at runtime by the debug
/// commands. In-memory only; the set resets on restart.
#[derive(Debug, Default)]
pub struct AdminRegistry {
    members: DashSet<UserId>,
}

impl AdminRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let registry = Self::new();
        for id in ids {
            registry.members.insert(UserId::new(id));
        }
        registry
    }

    /// Add an account. Returns false when it was already subscribed.
    pub fn subscribe(&self, user: UserId) -> bool {
        self.members.insert(user)
    }

    /// Remove an account. Removing a non-member is a no-op returning false.
    pub fn unsubscribe(&self, user: UserId) -> bool {
        self.members.remove(&user).is_some()
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.members.contains(&user)
    }

    pub fn members(&self) -> Vec<UserId> {
        self.members.iter().map(|entry| *entry).collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Forward one feedback message to every subscribed admin as a direct
/// message. Per-admin failures are logged and skipped; there is no delivery
/// confirmation, retry, or ordering guarantee across admins.
pub async fn relay_feedback(http: &Http, admins: &AdminRegistry, author: &str, text: &str) {
    let message = locale::feedback_message(author, text);
    for admin in admins.members() {
        match admin.create_dm_channel(http).await {
            Ok(channel) => {
                if let Err(e) = channel.id.say(http, &message).await {
                    warn!("Failed to deliver feedback to admin {}: {}", admin, e);
                }
            }
            Err(e) => {
                warn!("Failed to open DM with admin {}: {}", admin, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_then_unsubscribe_round_trips() {
        let registry = AdminRegistry::new();
        let user = UserId::new(7);

        assert!(registry.subscribe(user));
        assert!(registry.contains(user));

        assert!(registry.unsubscribe(user));
        assert!(!registry.contains(user));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unsubscribe_non_member_is_noop() {
        let registry = AdminRegistry::new();
        assert!(!registry.unsubscribe(UserId::new(7)));
    }

    #[test]
    fn test_duplicate_subscribe_keeps_one_entry() {
        let registry = AdminRegistry::new();
        let user = UserId::new(7);
        assert!(registry.subscribe(user));
        assert!(!registry.subscribe(user));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_from_ids_seeds_members() {
        let registry = AdminRegistry::from_ids([1, 2, 2]);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(UserId::new(1)));
        assert!(registry.contains(UserId::new(2)));
    }
}
