//! src/domain/mod.rs

mod new_subscriber;
mod subscriber;
mod subscriber_email;
mod subscriber_name;

pub use new_subscriber::NewSubscriber;
pub use subscriber::{Subscriber, SubscriberId};
pub use subscriber_email::SubscriberEmail;
pub use subscriber_name::SubscriberName;

/// Validation error for domain data
#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid email format.")]
    InvalidEmail(String),
    #[error("`{0}` is not a valid subscriber name.")]
    InvalidName(String),
}
