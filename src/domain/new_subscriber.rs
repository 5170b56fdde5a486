//! src/domain/new_subscriber.rs

use crate::domain::SubscriberEmail;
use crate::domain::SubscriberName;

/// A validated signup payload. No identifier yet - that is assigned by the
/// store on insertion.
#[derive(Debug)]
pub struct NewSubscriber {
    pub email: SubscriberEmail,
    pub name: SubscriberName,
}
