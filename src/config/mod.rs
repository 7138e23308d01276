//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GYM_MEMBERSHIP` prefix and nested values use double underscores as separators.
//!
//! Every setting has a default, so the binary runs with no environment at all.
//!
//! # Example
//!
//! ```no_run
//! use gym_membership::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Catalog file: {:?}", config.catalog.path);
//! ```

mod catalog;
mod error;
mod logging;
mod shell;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use shell::ShellConfig;

use serde::Deserialize;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "GYM_MEMBERSHIP";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log level and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Interactive shell options
    #[serde(default)]
    pub shell: ShellConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `GYM_MEMBERSHIP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GYM_MEMBERSHIP__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `GYM_MEMBERSHIP__CATALOG__PATH=...` -> `catalog.path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.catalog.validate()?;
        Ok(())
    }
}
