use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use wordbook_config::network::NetworkConfig;
use wordbook_types::Definition;

use crate::{DefinitionFetcher, FetchError};

/// Client for the free dictionaryapi.dev lookup endpoint
#[derive(Clone)]
pub struct DictionaryApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl DictionaryApiClient {
    pub fn new(config: &NetworkConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", config.api_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.api_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Lookup URL with `word` appended as one percent-encoded path segment
    pub fn entry_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }
}

#[async_trait]
impl DefinitionFetcher for DictionaryApiClient {
    async fn fetch(&self, word: &str) -> Result<Definition, FetchError> {
        if word.trim().is_empty() {
            return Err(FetchError::EmptyWord);
        }

        let url = self.entry_url(word);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        check_status(word, response.status())?;

        let entries: Vec<Definition> = response.json().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Decode(format!("Failed to parse response: {e}"))
            } else {
                // body cut off mid-read
                FetchError::Network(e)
            }
        })?;

        first_entry(word, entries)
    }
}

/// Any non-2xx answer means the API has nothing for this word
fn check_status(word: &str, status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        return Ok(());
    }
    tracing::debug!("Lookup of '{}' failed with HTTP {}", word, status);
    Err(FetchError::NotFound {
        word: word.to_string(),
        status: Some(status.as_u16()),
    })
}

fn first_entry(word: &str, entries: Vec<Definition>) -> Result<Definition, FetchError> {
    entries.into_iter().next().ok_or_else(|| FetchError::NotFound {
        word: word.to_string(),
        status: None,
    })
}
