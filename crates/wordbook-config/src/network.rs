use std::env;

use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Settings for calls to the remote dictionary API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Base URL, the word is appended as the last path segment
    pub api_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let api_url = env::var("WORDBOOK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_seconds = env::var("WORDBOOK_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            api_url,
            timeout_seconds,
            user_agent: format!("wordbook/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Full lookup URL for an already encoded word
    pub fn entry_url(&self, encoded_word: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), encoded_word)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::new()
    }
}
