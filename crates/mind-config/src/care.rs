//! Self-care tool defaults.

use mind_core::care::{DEFAULT_BREATHING_CYCLES, MAX_BREATHING_CYCLES, MIN_BREATHING_CYCLES};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_breathing_cycles() -> u32 {
    DEFAULT_BREATHING_CYCLES
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CareConfig {
    /// Box-breathing cycles used when `--cycles` is not given.
    #[serde(default = "default_breathing_cycles")]
    pub breathing_cycles: u32,
}

impl CareConfig {
    /// Check values that serde alone cannot constrain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BREATHING_CYCLES..=MAX_BREATHING_CYCLES).contains(&self.breathing_cycles) {
            return Err(ConfigError::InvalidValue {
                field: "care.breathing_cycles".to_string(),
                reason: format!(
                    "must be between {MIN_BREATHING_CYCLES} and {MAX_BREATHING_CYCLES}, got {}",
                    self.breathing_cycles
                ),
            });
        }
        Ok(())
    }
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            breathing_cycles: default_breathing_cycles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = CareConfig::default();
        assert_eq!(config.breathing_cycles, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn out_of_range_cycles_are_rejected() {
        let config = CareConfig {
            breathing_cycles: 12,
        };
        let err = config.validate().expect_err("12 is out of range");
        assert!(err.to_string().contains("care.breathing_cycles"));
    }
}
