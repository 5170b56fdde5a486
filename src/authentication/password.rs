//! src/authentication/password.rs

use crate::configuration::AdminSettings;
use crate::error::error_chain_fmt;
use crate::telemetry::spawn_blocking_with_tracing;
use anyhow::Context;
use argon2::{
    password_hash::SaltString, Algorithm, Argon2, Params, PasswordHash, PasswordHasher,
    PasswordVerifier, Version,
};
use secrecy::{ExposeSecret, Secret};

type CredsResult<T> = Result<T, CredentialsError>;

#[derive(thiserror::Error)]
pub enum CredentialsError {
    #[error("Username could not be found.")]
    UnknownUsername,
    #[error("Failed to verify password.")]
    PasswordVerificationFailed(#[from] argon2::password_hash::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

/// Check the submitted credentials against the configured admin account.
/// Returns the admin username on success.
#[tracing::instrument(name = "Validate credentials", skip(credentials, admin))]
pub async fn validate_credentials(
    credentials: Credentials,
    admin: &AdminSettings,
) -> CredsResult<String> {
    // Unknown usernames still verify against a dummy hash so both failure
    // paths take the same time.
    let mut username_match = false;
    let mut expected_password_hash = Secret::new(
        "$argon2id$v=19$m=15000,t=2,p=1$\
        gZiV/M1gPc22ElAH/Jh1Hw$\
        CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno"
            .to_string(),
    );
    if credentials.username == admin.username {
        username_match = true;
        expected_password_hash = admin.password_hash.clone();
    }

    spawn_blocking_with_tracing(move || {
        verify_password_hash(expected_password_hash, credentials.password)
    })
    .await
    .context("Failed to spawn blocking task.")??;

    if username_match {
        Ok(admin.username.clone())
    } else {
        Err(CredentialsError::UnknownUsername)
    }
}

#[tracing::instrument(
    name = "Verify password hash",
    skip(expected_password_hash, password_candidate)
)]
fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Secret<String>,
) -> CredsResult<()> {
    let expected_password_hash = PasswordHash::new(expected_password_hash.expose_secret())
        .context("Failed to parse hash in PHC string format.")?;
    Argon2::default().verify_password(
        password_candidate.expose_secret().as_bytes(),
        &expected_password_hash,
    )?;
    Ok(())
}

/// Hash a password into PHC string format, e.g. to seed the admin account.
pub fn compute_password_hash(password: Secret<String>) -> CredsResult<Secret<String>> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let password_hash = Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15_000, 2, 1, None).unwrap(),
    )
    .hash_password(password.expose_secret().as_bytes(), &salt)
    .context("Failed to hash password.")?
    .to_string();
    Ok(Secret::new(password_hash))
}
