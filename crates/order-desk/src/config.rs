//! Layered desk configuration.
//!
//! Layers, lowest priority first:
//! 1. Compiled-in defaults
//! 2. TOML file: the path in `ORDER_DESK_CONFIG` (must exist), otherwise `order-desk.toml` in
//!    the working directory if present
//! 3. Environment overrides with the `ORDER_DESK_` prefix, e.g. `ORDER_DESK_TAX_RATE=0.1`
//!
//! Queue capacity is fixed and cannot be configured.

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE: &str = "order-desk.toml";
pub const CONFIG_PATH_ENV: &str = "ORDER_DESK_CONFIG";
pub const ENV_PREFIX: &str = "ORDER_DESK";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeskConfig {
    /// Fraction of the subtotal charged as tax.
    pub tax_rate: f64,
    /// Prefix of generated order codes.
    pub code_prefix: String,
    /// Request channel size of each record store.
    pub store_buffer: usize,
    /// Most orders returned by a history search.
    pub history_limit: usize,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.08,
            code_prefix: "A".to_string(),
            store_buffer: 32,
            history_limit: 20,
        }
    }
}

impl DeskConfig {
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let d = Self::default();
        Ok(Config::builder()
            .set_default("tax_rate", d.tax_rate)?
            .set_default("code_prefix", d.code_prefix)?
            .set_default("store_buffer", d.store_buffer as i64)?
            .set_default("history_limit", d.history_limit as i64)?)
    }

    /// Loads defaults, then the config file, then `ORDER_DESK_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => File::with_name(&path).required(true),
            Err(_) => File::with_name(CONFIG_FILE).required(false),
        };
        let config = Self::defaults()?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Self::finish(config)
    }

    /// Defaults overlaid with a TOML document. Environment variables are not consulted.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config = Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Self::finish(config)
    }

    fn finish(config: Config) -> Result<Self, ConfigError> {
        let desk: DeskConfig = config.try_deserialize()?;
        desk.validate()?;
        Ok(desk)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tax_rate.is_finite() || self.tax_rate < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tax_rate must be a non-negative number, got {}",
                self.tax_rate
            )));
        }
        if self.code_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid("code_prefix cannot be empty".to_string()));
        }
        if self.store_buffer == 0 {
            return Err(ConfigError::Invalid("store_buffer must be at least 1".to_string()));
        }
        Ok(())
    }
}
