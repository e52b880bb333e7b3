//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default row limit for history listings.
const fn default_limit() -> u32 {
    50
}

const fn default_show_notes() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default row limit for `journal list`.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Whether listings include note text unless `--hide-notes` is passed.
    #[serde(default = "default_show_notes")]
    pub show_notes: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            show_notes: default_show_notes(),
        }
    }
}
