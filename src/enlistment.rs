//! src/enlistment.rs

use crate::domain::{NewSubscriber, Subscriber};
use crate::error::error_chain_fmt;
use crate::store::SubscriberStore;
use std::sync::Arc;

#[derive(thiserror::Error)]
pub enum EnlistmentError {
    #[error("This email is already registered.")]
    AlreadyRegistered,
    #[error("Subscriber not found.")]
    UnknownSubscriber,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for EnlistmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Business rules around the subscriber list. Holds nothing but a handle to
/// the store.
#[derive(Clone)]
pub struct EnlistmentService {
    store: Arc<dyn SubscriberStore>,
}

impl EnlistmentService {
    pub fn new(store: Arc<dyn SubscriberStore>) -> Self {
        Self { store }
    }

    /// Register a new subscriber. Email format is already guaranteed by
    /// `SubscriberEmail`, so only the uniqueness rule is checked here.
    ///
    /// The duplicate check and the insert are two separate store calls, so
    /// concurrent submissions of the same email can both pass the lookup and
    /// be admitted. The store declares no unique index that would catch this.
    #[tracing::instrument(
        name = "Enlisting a new subscriber.",
        skip(self, new_subscriber),
        fields(
            subscriber_email = %new_subscriber.email,
            subscriber_name = %new_subscriber.name.as_ref()
        )
    )]
    pub async fn enlist(&self, new_subscriber: NewSubscriber) -> Result<(), EnlistmentError> {
        if self
            .store
            .get_by_email(new_subscriber.email.as_ref())
            .await?
            .is_some()
        {
            return Err(EnlistmentError::AlreadyRegistered);
        }
        self.store.add(new_subscriber).await?;
        Ok(())
    }

    /// Snapshot of all current subscribers, straight from the store.
    pub async fn list_all(&self) -> Result<Vec<Subscriber>, EnlistmentError> {
        Ok(self.store.get_all().await?)
    }

    /// Remove the subscriber registered under `email`, if any.
    #[tracing::instrument(name = "Cancelling a subscription.", skip(self))]
    pub async fn cancel(&self, email: &str) -> Result<(), EnlistmentError> {
        let subscriber = self
            .store
            .get_by_email(email)
            .await?
            .ok_or(EnlistmentError::UnknownSubscriber)?;
        self.store.remove(&subscriber.id).await?;
        Ok(())
    }
}
