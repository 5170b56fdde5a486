//! src/error.rs

use crate::enlistment::EnlistmentError;
use crate::session_state::SessionError;
use crate::utils::see_other;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

pub type AppResult<T> = Result<T, Error>;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(thiserror::Error)]
pub enum Error {
    #[error("Authentication failed")]
    AuthError(#[source] anyhow::Error),
    #[error(transparent)]
    SessionError(#[from] SessionError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

// Only for call sites that already dealt with the recoverable variants;
// anything left over is an infrastructure failure.
impl From<EnlistmentError> for Error {
    fn from(e: EnlistmentError) -> Self {
        match e {
            EnlistmentError::UnexpectedError(e) => Error::UnexpectedError(e),
            other => Error::UnexpectedError(anyhow::Error::new(other)),
        }
    }
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        match self {
            Error::AuthError(_) => HttpResponse::new(StatusCode::UNAUTHORIZED),
            // Anonymous visitors get bounced to the login form instead of a
            // bare error page.
            Error::SessionError(_) => see_other("/login"),
            Error::UnexpectedError(_) => HttpResponse::new(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}
