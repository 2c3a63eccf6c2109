use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_max_attempts() -> u32 {
    5
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WordOfDayConfig {
    /// Fetch a word of the day at startup
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for WordOfDayConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_attempts: default_max_attempts(),
        }
    }
}
