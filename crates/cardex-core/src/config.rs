use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, ENV_PREFIX, FILENAME_PREFIX, FILENAME_TOKEN};
use crate::date::DateZone;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// IANA zone name used to read calendar fields from date-time cells.
    /// Falls back to the process local zone when unset.
    pub time_zone: Option<String>,
    pub output_dir: String,
    pub filename_prefix: String,
    pub filename_token: String,
}

impl ExportConfig {
    /// ## Summary
    /// Resolves the configured time zone.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidTimeZone` if the name is not a known IANA zone.
    pub fn zone(&self) -> CoreResult<DateZone> {
        DateZone::from_name(self.time_zone.as_deref())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            time_zone: None,
            output_dir: ".".to_string(),
            filename_prefix: FILENAME_PREFIX.to_string(),
            filename_token: FILENAME_TOKEN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `cardex.toml`.
    /// Environment variables use the `CARDEX_` prefix and `__` between sections,
    /// e.g. `CARDEX_EXPORT__TIME_ZONE=America/Denver`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// ## Summary
    /// Same as [`Settings::load`] with an explicit TOML path.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from(path: &str) -> Result<Self> {
        let defaults = Self::default();

        let config = Config::builder()
            .set_default("export.output_dir", defaults.export.output_dir)?
            .set_default("export.filename_prefix", defaults.export.filename_prefix)?
            .set_default("export.filename_token", defaults.export.filename_token)?
            .set_default("logging.level", defaults.logging.level)?
            // TOML file
            .add_source(config::File::with_name(path).required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true),
            )
            .build()
            .map_err(config_error)?;

        let settings = config.try_deserialize::<Self>().map_err(config_error)?;

        Ok(settings)
    }
}

fn config_error(e: config::ConfigError) -> CoreError {
    CoreError::ConfigError(e.to_string())
}

/// ## Summary
/// Loads configuration from the `.env` file, environment variables and `cardex.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
