pub mod categories;
pub mod error;
pub mod settings;
pub mod speech;
pub mod storage;
pub mod word_of_day;
pub mod words;

pub use error::{PlaybackError, StorageError};
