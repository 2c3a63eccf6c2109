use std::env;

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::speech::SpeechConfig;
use self::storage::StorageConfig;
use self::ui::UiConfig;
use self::word_of_day::WordOfDayConfig;

pub mod network;
pub mod speech;
pub mod storage;
pub mod ui;
pub mod word_of_day;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub storage: StorageConfig,
    pub speech: SpeechConfig,
    pub ui: UiConfig,
    pub word_of_day: WordOfDayConfig,

    /// Capacity of the front end -> app channel
    pub input_capacity: usize,
    /// Capacity of the app -> front end channel
    pub output_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let input_capacity = env::var("WORDBOOK_INPUT_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        let output_capacity = env::var("WORDBOOK_OUTPUT_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(256);

        let mut word_of_day = WordOfDayConfig::default();
        if let Some(enabled) = env::var("WORDBOOK_WORD_OF_DAY")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            word_of_day.enabled = enabled;
        }

        Config {
            network: NetworkConfig::new(),
            storage: StorageConfig::new(),
            speech: SpeechConfig::default(),
            ui: UiConfig::default(),
            word_of_day,

            input_capacity,
            output_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_profile_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"word_of_day": {"max_attempts": 3}, "ui": {}}"#).unwrap();
        assert_eq!(config.word_of_day.max_attempts, 3);
        assert!(config.word_of_day.enabled);
        assert_eq!(config.ui.max_definitions, 3);
        assert_eq!(config.speech.language, "en-US");
    }

    #[test]
    fn entry_url_joins_without_double_slash() {
        let mut network = NetworkConfig::default();
        network.api_url = "http://localhost:9000/entries/".to_string();
        assert_eq!(
            network.entry_url("ephemeral"),
            "http://localhost:9000/entries/ephemeral"
        );
    }
}
