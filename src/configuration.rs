//! src/configuration.rs

use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub storage: StorageSettings,
    pub admin: AdminSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    pub hmac_secret: Secret<String>,
}

/// Credentials of the single admin account allowed to manage subscribers.
/// The password is stored as an argon2id hash in PHC string format.
#[derive(serde::Deserialize, Clone)]
pub struct AdminSettings {
    pub username: String,
    pub password_hash: Secret<String>,
}

#[derive(serde::Deserialize, Clone)]
pub struct StorageSettings {
    /// Backend selector, see [`StorageBackend`]. An empty value selects the
    /// in-memory backend.
    #[serde(default)]
    pub backend: String,
    pub connection_string: Secret<String>,
    pub database_name: String,
    pub collection_name: String,
}

/// The two interchangeable subscriber store backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    InMemoryDb,
    MongoDb,
}

impl StorageSettings {
    pub fn backend(&self) -> Result<StorageBackend, String> {
        self.backend.clone().try_into()
    }
}

impl TryFrom<String> for StorageBackend {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "InMemoryDb" | "" => Ok(Self::InMemoryDb),
            "MongoDb" => Ok(Self::MongoDb),
            other => Err(format!(
                "{} is not a supported storage backend. \
                Use either `InMemoryDb` or `MongoDb`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");
    let environment_filename = format!("{}.yaml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and
        // '__' as separator), e.g. `APP_STORAGE__BACKEND=MongoDb`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environments for our application.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}
