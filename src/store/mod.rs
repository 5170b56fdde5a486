//! src/store/mod.rs

mod in_memory;
mod mongo;

pub use in_memory::InMemoryStore;
pub use mongo::MongoStore;

use crate::configuration::{StorageBackend, StorageSettings};
use crate::domain::{NewSubscriber, Subscriber, SubscriberId};
use std::sync::Arc;

/// Persistence boundary for subscriber records.
///
/// Both backends implement the same contract: `add` assigns a fresh
/// identifier and never fails for valid input - duplicate detection is the
/// caller's responsibility, not enforced here. `remove` of an absent
/// identifier is a no-op, not an error.
#[async_trait::async_trait]
pub trait SubscriberStore: Send + Sync {
    async fn add(&self, new_subscriber: NewSubscriber) -> Result<(), anyhow::Error>;
    /// Snapshot of all current subscribers. Insertion order for the
    /// in-memory backend, unspecified order for MongoDB.
    async fn get_all(&self) -> Result<Vec<Subscriber>, anyhow::Error>;
    async fn get_by_id(&self, id: &SubscriberId) -> Result<Option<Subscriber>, anyhow::Error>;
    async fn get_by_email(&self, email: &str) -> Result<Option<Subscriber>, anyhow::Error>;
    async fn remove(&self, id: &SubscriberId) -> Result<(), anyhow::Error>;
}

/// Construct the store selected by configuration. Called once at startup;
/// an unrecognized selector is fatal.
pub async fn build_subscriber_store(
    settings: &StorageSettings,
) -> Result<Arc<dyn SubscriberStore>, anyhow::Error> {
    let backend = settings.backend().map_err(anyhow::Error::msg)?;
    let store: Arc<dyn SubscriberStore> = match backend {
        StorageBackend::InMemoryDb => Arc::new(InMemoryStore::new()),
        StorageBackend::MongoDb => Arc::new(MongoStore::connect(settings).await?),
    };
    Ok(store)
}
