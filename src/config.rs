//! Process configuration.
//!
//! Configuration is read once at start-up into an [`AppConfig`] value that is
//! passed explicitly to whatever needs it and never mutated afterwards.

use std::num::ParseIntError;
use thiserror::Error;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;
/// Connection pool size used when `DB_POOL_SIZE` is unset.
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;
/// Origins admitted by CORS when `ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:4173"];
/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration loading errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A numeric variable could not be parsed.
    #[error("invalid value for {name}: {source}")]
    InvalidNumber {
        /// Variable name.
        name: &'static str,
        /// Parse failure.
        source: ParseIntError,
    },
    /// A variable parsed but is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Runtime configuration for the task server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port to listen on.
    pub port: u16,
    /// `PostgreSQL` connection URL; `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub db_pool_size: u32,
    /// Origins admitted by CORS.
    pub allowed_origins: Vec<String>,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            db_pool_size: DEFAULT_DB_POOL_SIZE,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.map(str::to_owned).to_vec(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// Recognised variables: `PORT`, `DATABASE_URL` (or the legacy
    /// `MONGODB_CONN`), `DB_POOL_SIZE`, `ALLOWED_ORIGINS` (comma separated)
    /// and `RUST_LOG`. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = read("PORT")
            .map(|value| parse_number::<u16>("PORT", &value))
            .transpose()?
            .unwrap_or(defaults.port);
        let db_pool_size = read("DB_POOL_SIZE")
            .map(|value| parse_number::<u32>("DB_POOL_SIZE", &value))
            .transpose()?
            .unwrap_or(defaults.db_pool_size);
        let database_url = read("DATABASE_URL")
            .or_else(|| read("MONGODB_CONN"))
            .map(|value| value.trim().to_owned());
        let allowed_origins = read("ALLOWED_ORIGINS").map_or(defaults.allowed_origins, |value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_owned)
                .collect()
        });
        let log_filter = read("RUST_LOG").unwrap_or(defaults.log_filter);

        let config = Self {
            port,
            database_url,
            db_pool_size,
            allowed_origins,
            log_filter,
        };
        validate_config(&config)?;
        Ok(config)
    }
}

fn parse_number<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|source| ConfigError::InvalidNumber { name, source })
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.db_pool_size == 0 {
        return Err(ConfigError::Invalid(
            "DB_POOL_SIZE must be greater than 0".to_owned(),
        ));
    }
    if config.allowed_origins.is_empty() {
        return Err(ConfigError::Invalid(
            "ALLOWED_ORIGINS must list at least one origin".to_owned(),
        ));
    }
    Ok(())
}
