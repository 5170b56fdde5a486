//! src/store/in_memory.rs

use crate::domain::{NewSubscriber, Subscriber, SubscriberId};
use crate::store::SubscriberStore;
use parking_lot::Mutex;
use uuid::Uuid;

/// Subscriber store backed by a plain vector. All five operations serialize
/// behind the single lock, so concurrent requests cannot lose updates.
pub struct InMemoryStore {
    subscribers: Mutex<Vec<Subscriber>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl SubscriberStore for InMemoryStore {
    async fn add(&self, new_subscriber: NewSubscriber) -> Result<(), anyhow::Error> {
        let subscriber = Subscriber {
            id: SubscriberId::new(Uuid::new_v4().to_string()),
            email: new_subscriber.email,
            name: new_subscriber.name,
        };
        self.subscribers.lock().push(subscriber);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Subscriber>, anyhow::Error> {
        Ok(self.subscribers.lock().clone())
    }

    async fn get_by_id(&self, id: &SubscriberId) -> Result<Option<Subscriber>, anyhow::Error> {
        let subscribers = self.subscribers.lock();
        Ok(subscribers.iter().find(|s| &s.id == id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Subscriber>, anyhow::Error> {
        let subscribers = self.subscribers.lock();
        Ok(subscribers
            .iter()
            .find(|s| s.email.as_ref() == email)
            .cloned())
    }

    async fn remove(&self, id: &SubscriberId) -> Result<(), anyhow::Error> {
        self.subscribers.lock().retain(|s| &s.id != id);
        Ok(())
    }
}
