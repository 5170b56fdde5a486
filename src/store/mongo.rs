//! src/store/mongo.rs

use crate::configuration::StorageSettings;
use crate::domain::{NewSubscriber, Subscriber, SubscriberEmail, SubscriberId, SubscriberName};
use crate::store::SubscriberStore;
use anyhow::Context;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Collection};
use secrecy::ExposeSecret;

/// Subscriber store backed by a single MongoDB collection. Atomicity is
/// per-operation, delegated to the driver; there is no cross-operation
/// transaction.
pub struct MongoStore {
    collection: Collection<SubscriberDocument>,
}

impl MongoStore {
    pub async fn connect(settings: &StorageSettings) -> Result<Self, anyhow::Error> {
        let client = Client::with_uri_str(settings.connection_string.expose_secret())
            .await
            .context("Failed to create the MongoDB client.")?;
        let collection = client
            .database(&settings.database_name)
            .collection(&settings.collection_name);
        Ok(Self { collection })
    }
}

/// Wire shape of a subscriber in the collection. The domain identifier is an
/// opaque string, the collection key is an ObjectId; this type is the
/// explicit mapping between the two.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct SubscriberDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
}

impl SubscriberDocument {
    fn from_new_subscriber(new_subscriber: NewSubscriber) -> Self {
        Self {
            // Left empty so the driver assigns a fresh ObjectId on insertion.
            id: None,
            name: new_subscriber.name.as_ref().to_owned(),
            email: new_subscriber.email.as_ref().to_owned(),
        }
    }

    fn try_into_subscriber(self) -> Result<Subscriber, anyhow::Error> {
        let id = self
            .id
            .context("Document read from the collection has no _id.")?;
        let name = SubscriberName::parse(self.name.clone())
            .with_context(|| format!("Read invalid subscriber name `{}` from MongoDB.", self.name))?;
        let email = SubscriberEmail::parse(self.email.clone()).with_context(|| {
            format!("Read invalid subscriber email `{}` from MongoDB.", self.email)
        })?;
        Ok(Subscriber {
            id: SubscriberId::new(id.to_hex()),
            name,
            email,
        })
    }
}

#[async_trait::async_trait]
impl SubscriberStore for MongoStore {
    #[tracing::instrument(name = "Saving new subscriber details in MongoDB.", skip_all)]
    async fn add(&self, new_subscriber: NewSubscriber) -> Result<(), anyhow::Error> {
        let document = SubscriberDocument::from_new_subscriber(new_subscriber);
        self.collection
            .insert_one(document)
            .await
            .context("Failed to insert new subscriber in the collection.")?;
        Ok(())
    }

    #[tracing::instrument(name = "Fetching all subscribers from MongoDB.", skip_all)]
    async fn get_all(&self) -> Result<Vec<Subscriber>, anyhow::Error> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .context("Failed to query the subscriber collection.")?;
        let documents: Vec<SubscriberDocument> = cursor
            .try_collect()
            .await
            .context("Failed to drain the subscriber cursor.")?;
        documents
            .into_iter()
            .map(SubscriberDocument::try_into_subscriber)
            .collect()
    }

    #[tracing::instrument(name = "Looking up subscriber by id in MongoDB.", skip(self))]
    async fn get_by_id(&self, id: &SubscriberId) -> Result<Option<Subscriber>, anyhow::Error> {
        // Identifiers assigned by another backend are not ObjectIds; they
        // cannot match anything here.
        let object_id = match ObjectId::parse_str(id.as_ref()) {
            Ok(object_id) => object_id,
            Err(_) => return Ok(None),
        };
        let document = self
            .collection
            .find_one(doc! { "_id": object_id })
            .await
            .context("Failed to query the collection by _id.")?;
        document.map(SubscriberDocument::try_into_subscriber).transpose()
    }

    #[tracing::instrument(name = "Looking up subscriber by email in MongoDB.", skip(self))]
    async fn get_by_email(&self, email: &str) -> Result<Option<Subscriber>, anyhow::Error> {
        let document = self
            .collection
            .find_one(doc! { "email": email })
            .await
            .context("Failed to query the collection by email.")?;
        document.map(SubscriberDocument::try_into_subscriber).transpose()
    }

    #[tracing::instrument(name = "Removing subscriber from MongoDB.", skip(self))]
    async fn remove(&self, id: &SubscriberId) -> Result<(), anyhow::Error> {
        let object_id = match ObjectId::parse_str(id.as_ref()) {
            Ok(object_id) => object_id,
            Err(_) => return Ok(()),
        };
        self.collection
            .delete_one(doc! { "_id": object_id })
            .await
            .context("Failed to delete subscriber from the collection.")?;
        Ok(())
    }
}
