use crate::category::Difficulty;
use crate::definition::{Definition, HistoryEntry};
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Explicit user search
    Search(String),
    /// Search one of the related words of the current word of the day
    SearchRelated(usize),
    /// Bookmark the given word, or the definition on screen when `None`
    AddFavorite(Option<String>),
    RemoveFavorite(String),
    ListFavorites,
    ListHistory,
    /// Remove the history entry with this exact timestamp
    RemoveHistory(String),
    ClearHistory,
    /// Show a stored history entry by 1-based position, without fetching
    OpenHistory(usize),
    /// Show a stored favorite or history definition by word, without fetching
    OpenSaved(String),
    ListCategories,
    BrowseCategory {
        category: String,
        difficulty: Difficulty,
    },
    /// Search the `n`-th (1-based) word of the last word list shown
    SearchListed(usize),
    /// Speak the given word, or the definition on screen when `None`
    Speak(Option<String>),
    StopSpeech,
    ToggleDarkMode,
    SetFontSize(u32),
    ShowSettings,
    RefreshWordOfDay,
    /// Result of the background word-of-the-day task
    WordOfDayReady(Definition),
    /// Callback from the speech engine
    Speech(SpeechEvent),
    UiEvent(UiEvent),
}

/// Notifications emitted by a speech engine.
///
/// `id` is the utterance id handed to the engine when speaking started, so a
/// late event from an interrupted utterance can be told apart from a newer
/// utterance of the same word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Started { id: u64, word: String },
    Finished { id: u64, word: String },
    Cancelled { id: u64, word: String },
}

impl SpeechEvent {
    pub fn id(&self) -> u64 {
        match self {
            SpeechEvent::Started { id, .. }
            | SpeechEvent::Finished { id, .. }
            | SpeechEvent::Cancelled { id, .. } => *id,
        }
    }

    pub fn word(&self) -> &str {
        match self {
            SpeechEvent::Started { word, .. }
            | SpeechEvent::Finished { word, .. }
            | SpeechEvent::Cancelled { word, .. } => word,
        }
    }
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    ShowDefinition(Definition),
    ShowWordOfDay {
        definition: Definition,
        related: Vec<String>,
    },
    ShowFavorites(Vec<Definition>),
    ShowHistory(Vec<HistoryEntry>),
    ShowSettings(Settings),
    ShowCategories(Vec<String>),
    ShowWordList {
        category: String,
        difficulty: Difficulty,
        words: Vec<String>,
    },
    /// User-visible failure message
    ShowError(String),
    Status(String),
    Help,
    Close,
}
