//! src/session_state.rs

use crate::error::{error_chain_fmt, AppResult, Error};
use actix_session::{Session, SessionExt};
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};

#[derive(thiserror::Error)]
pub enum SessionError {
    #[error("The user has not logged in.")]
    UserNotLoggedIn,
    #[error(transparent)]
    SessionInsertError(#[from] actix_session::SessionInsertError),
    #[error(transparent)]
    SessionGetError(#[from] actix_session::SessionGetError),
}

impl std::fmt::Debug for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct TypedSession(Session);

impl TypedSession {
    const USERNAME_KEY: &'static str = "username";

    pub fn renew(&self) {
        self.0.renew();
    }

    pub fn insert_username(&self, username: String) -> AppResult<()> {
        self.0
            .insert(Self::USERNAME_KEY, username)
            .map_err(SessionError::from)
            .map_err(Error::from)
    }

    pub fn get_username(&self) -> AppResult<Option<String>> {
        self.0
            .get(Self::USERNAME_KEY)
            .map_err(SessionError::from)
            .map_err(Error::from)
    }

    pub fn log_out(self) {
        self.0.purge();
    }
}

impl FromRequest for TypedSession {
    // Return the same error returned by the implementation of `FromRequest`
    // for `Session`.
    type Error = <Session as FromRequest>::Error;
    // We do not perform any I/O, so wrap `TypedSession` into `Ready` to
    // convert it into a `Future` that resolves on first poll.
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
