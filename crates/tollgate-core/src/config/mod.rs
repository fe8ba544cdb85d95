use std::path::Path;

use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::database::DatabasePrivilege;
use crate::privilege::Privilege;


#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub users: Vec<UserConfig>,
}

/// A user known to the static credential backend.
#[derive(Debug, Clone, Deserialize)]
pub struct UserConfig {
    pub name: String,
    /// Argon2 PHC string. Users without one can be looked up but never
    /// authenticate.
    #[serde(default)]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub resources: Vec<ResourceGrant>,
    #[serde(default)]
    pub databases: Vec<DatabaseGrant>,
}

/// Grants `privilege` on the resource at `path` and everything below it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceGrant {
    pub path: String,
    pub privilege: Privilege,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseGrant {
    pub name: String,
    pub privilege: DatabasePrivilege,
}

impl Settings {
    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder().set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Loads settings from a TOML file and `TOLLGATE__*` environment variables.
    /// Environment variables take precedence over file values.
    ///
    /// When `path` is `None` the default file is used if it exists.
    ///
    /// ## Errors
    /// Returns an error if an explicit file is missing, or if building the
    /// configuration or deserializing it fails.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Ok(Self::builder()?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?)
    }

    /// ## Summary
    /// Parses settings from TOML text, applying the same defaults as [`Settings::load`].
    ///
    /// ## Errors
    /// Returns an error if the text is not valid TOML or does not match the schema.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(Self::builder()?
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?)
    }
}

/// ## Summary
/// Loads configuration from the `.env` file, environment variables and the
/// given (or default) TOML file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load(path)?;
    tracing::debug!(users = settings.auth.users.len(), "Configuration loaded");
    Ok(settings)
}
