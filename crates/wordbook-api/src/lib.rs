mod client;

pub use client::DictionaryApiClient;

use wordbook_types::Definition;

/// Source of word definitions
///
/// Implementations make a single attempt per call. Retrying is up to the caller.
#[async_trait::async_trait]
pub trait DefinitionFetcher: Send + Sync {
    /// Look up `word` as typed and return the first matching entry
    async fn fetch(&self, word: &str) -> Result<Definition, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Word not found: {word}")]
    NotFound { word: String, status: Option<u16> },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid API url: {0}")]
    InvalidUrl(String),

    #[error("Empty search term")]
    EmptyWord,
}

impl FetchError {
    /// The word is simply not in the dictionary, as opposed to a failed request
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}
