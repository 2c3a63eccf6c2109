pub mod category;
pub mod definition;
pub mod settings;
pub mod types;

pub use category::{Difficulty, UnknownDifficulty};
pub use definition::{Definition, HistoryEntry, Meaning, Phonetic, Sense};
pub use settings::{FONT_SIZE_PRESETS, Palette, Settings, Theme, Typography};
pub use types::{AppEvent, SpeechEvent, UiEvent};
