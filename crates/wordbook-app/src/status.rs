use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use tokio::sync::RwLock;
use wordbook_types::Definition;

/// State of the explicit search screen
#[derive(Clone, Debug, Default)]
pub struct SearchStatus {
    /// Definition on screen, cleared by a failed search
    pub current: Option<Definition>,
    /// User-visible error of the last search
    pub error: Option<String>,
}

impl SearchStatus {
    pub fn found(&mut self, definition: Definition) {
        self.current = Some(definition);
        self.error = None;
    }

    pub fn failed(&mut self, message: String) {
        self.current = None;
        self.error = Some(message);
    }
}

/// Application status
pub struct AppStatus {
    pub search: Arc<RwLock<SearchStatus>>,
    pub word_of_day: Arc<RwLock<Option<Definition>>>,
    pub word_of_day_running: AtomicBool,
    /// Last word list shown, what `pick <n>` indexes into
    pub listed_words: Arc<RwLock<Vec<String>>>,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            search: Arc::new(RwLock::new(SearchStatus::default())),
            word_of_day: Arc::new(RwLock::new(None)),
            word_of_day_running: AtomicBool::new(false),
            listed_words: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// The definition commands without an explicit word act on:
    /// the search result, else the word of the day
    pub async fn focused(&self) -> Option<Definition> {
        if let Some(current) = self.search.read().await.current.clone() {
            return Some(current);
        }
        self.word_of_day.read().await.clone()
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}
