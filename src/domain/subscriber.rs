//! src/domain/subscriber.rs

use crate::domain::{SubscriberEmail, SubscriberName};

/// Opaque store-assigned identifier. The in-memory backend hands out UUID
/// text, MongoDB hands out ObjectId hex; an identifier only resolves within
/// the backend that assigned it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriberId(String);

impl SubscriberId {
    pub fn new(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for SubscriberId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A stored subscriber record.
#[derive(Debug, Clone)]
pub struct Subscriber {
    pub id: SubscriberId,
    pub email: SubscriberEmail,
    pub name: SubscriberName,
}
