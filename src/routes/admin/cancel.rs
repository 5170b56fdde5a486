//! src/routes/admin/cancel.rs

use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;

use crate::enlistment::{EnlistmentError, EnlistmentService};
use crate::error::{AppResult, Error};
use crate::utils::see_other;

#[derive(serde::Deserialize)]
pub struct CancelFormData {
    email: String,
}

#[tracing::instrument(
    name = "Removing a subscriber.",
    skip(form, service),
    fields(subscriber_email = %form.email)
)]
pub async fn cancel_subscription(
    form: web::Form<CancelFormData>,
    service: web::Data<EnlistmentService>,
) -> AppResult<HttpResponse> {
    match service.cancel(&form.email).await {
        Ok(()) => {
            FlashMessage::info(format!("{} is no longer subscribed.", form.email)).send()
        }
        Err(EnlistmentError::UnexpectedError(e)) => return Err(Error::UnexpectedError(e)),
        Err(recoverable) => FlashMessage::error(recoverable.to_string()).send(),
    }
    Ok(see_other("/admin/dashboard"))
}
