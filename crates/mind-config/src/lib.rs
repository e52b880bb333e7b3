//! # mind-config
//!
//! Layered configuration loading for MindEase using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MINDEASE_*` prefix, `__` as separator)
//! 2. Project-level `.mindease/config.toml`
//! 3. User-level `~/.config/mindease/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MINDEASE_STORE__LOG_PATH` -> `store.log_path`,
//! `MINDEASE_CARE__BREATHING_CYCLES` -> `care.breathing_cycles`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use mind_config::MindConfig;
//!
//! let config = MindConfig::load().expect("config");
//! println!("mood log at {}", config.store.log_path);
//! ```

mod care;
mod error;
mod general;
mod store;

pub use care::CareConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Env var prefix for every MindEase setting.
pub const ENV_PREFIX: &str = "MINDEASE_";

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".mindease/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MindConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub care: CareConfig,
}

impl MindConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// `.env` files are not read here; the binary loads them before calling this.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer more
    /// providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.log_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.log_path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        self.care.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mindease").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = MindConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.store.log_path, "mood_log.csv");
        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.care.breathing_cycles, 4);
    }

    #[test]
    fn empty_log_path_is_rejected() {
        let mut config = MindConfig::default();
        config.store.log_path = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
