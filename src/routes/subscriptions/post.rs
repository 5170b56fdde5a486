//! src/routes/subscriptions/post.rs

use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;

use crate::domain::{NewSubscriber, SubscriberEmail, SubscriberName, ValidationError};
use crate::enlistment::{EnlistmentError, EnlistmentService};
use crate::error::{AppResult, Error};
use crate::utils::see_other;

#[derive(serde::Deserialize)]
pub struct FormData {
    // Absent fields behave like empty ones and fail validation.
    #[serde(default)]
    email: String,
    #[serde(default)]
    name: String,
}

impl TryFrom<FormData> for NewSubscriber {
    type Error = ValidationError;

    fn try_from(value: FormData) -> Result<Self, Self::Error> {
        let name = SubscriberName::parse(value.name)?;
        let email = SubscriberEmail::parse(value.email)?;
        Ok(Self { email, name })
    }
}

#[tracing::instrument(
    name = "Adding a new subscriber.",
    skip(form, service),
    fields(
        subscriber_email = %form.email,
        subscriber_name = %form.name
    )
)]
pub async fn subscribe(
    form: web::Form<FormData>,
    service: web::Data<EnlistmentService>,
) -> AppResult<HttpResponse> {
    let new_subscriber: NewSubscriber = match form.0.try_into() {
        Ok(new_subscriber) => new_subscriber,
        Err(validation_error) => {
            FlashMessage::error(validation_error.to_string()).send();
            return Ok(see_other("/subscriptions"));
        }
    };
    match service.enlist(new_subscriber).await {
        Ok(()) => {
            FlashMessage::info("You have successfully signed up for our newsletter!").send()
        }
        Err(EnlistmentError::UnexpectedError(e)) => return Err(Error::UnexpectedError(e)),
        Err(recoverable) => FlashMessage::error(recoverable.to_string()).send(),
    }
    Ok(see_other("/subscriptions"))
}
