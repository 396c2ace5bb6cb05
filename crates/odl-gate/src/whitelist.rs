use std::collections::HashSet;
use std::sync::RwLock;

use odl_types::PublisherId;

/// Capability check: is a publisher authorized to record checkpoint data.
///
/// A pure lookup against externally managed whitelist state; implementations
/// never mutate on the query path. Callers treat `false` as an
/// authorization failure.
pub trait PublisherWhitelist: Send + Sync {
    fn is_whitelisted(&self, publisher: &PublisherId) -> bool;
}

/// In-memory whitelist for tests, local demos, and embedding.
#[derive(Default)]
pub struct StaticWhitelist {
    members: RwLock<HashSet<PublisherId>>,
}

impl StaticWhitelist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a whitelist from an initial member set.
    pub fn from_iter(members: impl IntoIterator<Item = PublisherId>) -> Self {
        Self {
            members: RwLock::new(members.into_iter().collect()),
        }
    }

    /// Authorize a publisher.
    pub fn grant(&self, publisher: PublisherId) {
        if let Ok(mut members) = self.members.write() {
            members.insert(publisher);
        }
    }

    /// Remove a publisher's authorization.
    pub fn revoke(&self, publisher: &PublisherId) {
        if let Ok(mut members) = self.members.write() {
            members.remove(publisher);
        }
    }

    /// Number of authorized publishers.
    pub fn len(&self) -> usize {
        self.members.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PublisherWhitelist for StaticWhitelist {
    fn is_whitelisted(&self, publisher: &PublisherId) -> bool {
        self.members
            .read()
            .map(|members| members.contains(publisher))
            .unwrap_or(false)
    }
}
