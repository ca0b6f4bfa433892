//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every section falls back to its defaults when absent.

pub mod logging;
pub mod query;
pub mod store;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::query::QueryConfig;
use self::store::StoreConfig;

use crate::error::AppError;

/// Prefix for configuration environment variables (`MOVIEDB__QUERY__MAX_PAGE_SIZE`).
pub const ENV_PREFIX: &str = "MOVIEDB";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// configuration (base file + environment overlay + `MOVIEDB__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Record store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Query, paging and sorting defaults.
    #[serde(default)]
    pub query: QueryConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the base configuration file with an environment-specific
    /// overlay (`config/{env}.toml`) and environment variables prefixed with
    /// `MOVIEDB__`. Missing files are skipped.
    pub fn load(base_path: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(base_path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.query.validate()?;
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let config = AppConfig::load("config/does-not-exist", "nowhere").unwrap();
        assert_eq!(config.query.default_page_size, 10);
        assert_eq!(config.query.default_sort_field, "title");
        assert!(config.store.seed_path.is_none());
        assert_eq!(config.logging.level, "info");
    }
}
