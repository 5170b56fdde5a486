//! src/authentication/middleware.rs

use crate::error::Error;
use crate::session_state::{SessionError, TypedSession};
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    FromRequest, HttpMessage,
};
use actix_web_lab::middleware::Next;
use std::ops::Deref;

pub async fn reject_anonymous_users(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let session = {
        let (http_request, payload) = req.parts_mut();
        TypedSession::from_request(http_request, payload).await
    }?;

    match session.get_username()? {
        Some(username) => {
            req.extensions_mut().insert(AuthenticatedAdmin(username));
            next.call(req).await
        }
        None => Err(actix_web::Error::from(Error::from(
            SessionError::UserNotLoggedIn,
        ))),
    }
}

/// Username of the logged-in admin, inserted by `reject_anonymous_users`.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin(String);

impl std::fmt::Display for AuthenticatedAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Deref for AuthenticatedAdmin {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
