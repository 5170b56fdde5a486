//! src/routes/login/post.rs

use crate::authentication::{validate_credentials, Credentials};
use crate::configuration::AdminSettings;
use crate::error::Error;
use crate::session_state::TypedSession;
use crate::utils::see_other;
use actix_web::{error::InternalError, web, HttpResponse};
use actix_web_flash_messages::FlashMessage;
use secrecy::Secret;

#[derive(serde::Deserialize)]
pub struct FormData {
    username: String,
    password: Secret<String>,
}

#[tracing::instrument(
    skip(form, admin, session),
    fields(username=tracing::field::Empty)
)]
pub async fn login(
    form: web::Form<FormData>,
    admin: web::Data<AdminSettings>,
    session: TypedSession,
) -> Result<HttpResponse, InternalError<Error>> {
    let credentials = Credentials {
        username: form.0.username,
        password: form.0.password,
    };
    tracing::Span::current().record("username", tracing::field::display(&credentials.username));
    match validate_credentials(credentials, &admin).await {
        Ok(username) => {
            session.renew();
            session
                .insert_username(username)
                .map_err(|e| login_redirect(Error::UnexpectedError(anyhow::Error::new(e))))?;
            Ok(see_other("/admin/dashboard"))
        }
        Err(e) => Err(login_redirect(Error::AuthError(anyhow::Error::new(e)))),
    }
}

fn login_redirect(e: Error) -> InternalError<Error> {
    FlashMessage::error(e.to_string()).send();
    let response = see_other("/login");
    InternalError::from_response(e, response)
}
