//! Mood log storage configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_log_path() -> String {
    "mood_log.csv".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path to the CSV mood log. Relative paths resolve against the working directory.
    #[serde(default = "default_log_path")]
    pub log_path: String,
}

impl StoreConfig {
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(&self.log_path)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
        }
    }
}
