use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use wordbook_types::{Definition, HistoryEntry};

use crate::storage::{KeyValueStore, StorageKey, load_json, save_json};

/// Most recent searches kept in history
pub const HISTORY_LIMIT: usize = 50;

/// Current time in the stored timestamp format, e.g. `2024-05-01T09:30:00.123Z`
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Favorites and search history, mirrored to a [`KeyValueStore`].
///
/// Every mutation updates memory first and then writes the whole list back.
/// A failed write is logged and leaves the key pending; the next mutation (or
/// [`WordStore::flush`]) writes every pending key again, so storage catches
/// up with memory as soon as it accepts writes.
pub struct WordStore {
    store: Arc<dyn KeyValueStore>,
    favorites: Vec<Definition>,
    history: Vec<HistoryEntry>,
    pending: BTreeSet<StorageKey>,
}

impl WordStore {
    /// Empty lists, nothing read from storage
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            favorites: Vec::new(),
            history: Vec::new(),
            pending: BTreeSet::new(),
        }
    }

    /// Read both lists; missing or unreadable values start empty
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let mut words = Self::new(store);

        match load_json::<Vec<Definition>>(words.store.as_ref(), StorageKey::Favorites).await {
            Ok(Some(favorites)) => words.favorites = favorites,
            Ok(None) => {}
            Err(e) => tracing::error!("Error loading favorites: {e}"),
        }

        match load_json::<Vec<HistoryEntry>>(words.store.as_ref(), StorageKey::History).await {
            Ok(Some(mut history)) => {
                history.truncate(HISTORY_LIMIT);
                words.history = history;
            }
            Ok(None) => {}
            Err(e) => tracing::error!("Error loading history: {e}"),
        }

        tracing::info!(
            "Loaded {} favorites and {} history entries",
            words.favorites.len(),
            words.history.len()
        );
        words
    }

    pub fn favorites(&self) -> &[Definition] {
        &self.favorites
    }

    /// Newest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn is_favorite(&self, word: &str) -> bool {
        self.favorites.iter().any(|fav| fav.word == word)
    }

    /// A definition we already hold locally, favorites first
    pub fn find(&self, word: &str) -> Option<&Definition> {
        self.favorites
            .iter()
            .find(|fav| fav.word == word)
            .or_else(|| {
                self.history
                    .iter()
                    .map(|entry| &entry.word)
                    .find(|def| def.word == word)
            })
    }

    /// Append unless the word is already a favorite. Returns whether it was added.
    pub async fn add_favorite(&mut self, def: Definition) -> bool {
        if self.is_favorite(&def.word) {
            return false;
        }
        self.favorites.push(def);
        self.persist(StorageKey::Favorites).await;
        true
    }

    /// Remove by word, absent words are not an error. Returns whether anything was removed.
    pub async fn remove_favorite(&mut self, word: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|fav| fav.word != word);
        self.persist(StorageKey::Favorites).await;
        self.favorites.len() != before
    }

    /// Returns whether the word is a favorite afterwards
    pub async fn toggle_favorite(&mut self, def: Definition) -> bool {
        if self.is_favorite(&def.word) {
            self.remove_favorite(&def.word).await;
            false
        } else {
            self.add_favorite(def).await
        }
    }

    /// Record a search now. Returns the new entry's timestamp.
    pub async fn add_history(&mut self, def: Definition) -> String {
        let timestamp = now_timestamp();
        self.add_history_at(def, timestamp.clone()).await;
        timestamp
    }

    /// Record a search with an explicit timestamp.
    ///
    /// Any older entry for the same word is dropped, the new one goes first and
    /// the list is cut to [`HISTORY_LIMIT`].
    pub async fn add_history_at(&mut self, def: Definition, timestamp: String) {
        self.history.retain(|entry| entry.word.word != def.word);
        self.history.insert(0, HistoryEntry { word: def, timestamp });
        self.history.truncate(HISTORY_LIMIT);
        self.persist(StorageKey::History).await;
    }

    /// Remove entries with exactly this timestamp. Returns whether anything was removed.
    pub async fn remove_history(&mut self, timestamp: &str) -> bool {
        let before = self.history.len();
        self.history.retain(|entry| entry.timestamp != timestamp);
        self.persist(StorageKey::History).await;
        self.history.len() != before
    }

    pub async fn clear_history(&mut self) {
        self.history.clear();
        self.persist(StorageKey::History).await;
    }

    /// Keys whose last write failed
    pub fn pending_writes(&self) -> Vec<StorageKey> {
        self.pending.iter().copied().collect()
    }

    /// Retry pending writes. Returns true when storage matches memory.
    pub async fn flush(&mut self) -> bool {
        self.write_pending().await;
        self.pending.is_empty()
    }

    async fn persist(&mut self, key: StorageKey) {
        self.pending.insert(key);
        self.write_pending().await;
    }

    async fn write_pending(&mut self) {
        let keys: Vec<StorageKey> = self.pending.iter().copied().collect();
        for key in keys {
            let result = match key {
                StorageKey::Favorites => {
                    save_json(self.store.as_ref(), key, &self.favorites).await
                }
                StorageKey::History => save_json(self.store.as_ref(), key, &self.history).await,
                StorageKey::Settings => {
                    // owned by the settings store
                    self.pending.remove(&key);
                    continue;
                }
            };

            match result {
                Ok(()) => {
                    self.pending.remove(&key);
                }
                Err(e) => tracing::error!("Error saving {key}, will retry on next change: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::storage::testing::FlakyStore;

    fn def(word: &str) -> Definition {
        Definition::bare(word)
    }

    fn stamp(i: usize) -> String {
        format!("2024-01-01T00:00:{:02}.{:03}Z", i / 1000, i % 1000)
    }

    #[tokio::test]
    async fn history_is_capped_and_unique() {
        let mut words = WordStore::new(Arc::new(MemoryStore::new()));

        // 120 searches over 70 distinct words, with repeats
        for i in 0..120 {
            let word = format!("word{}", (i * 13) % 70);
            words.add_history_at(def(&word), stamp(i)).await;

            assert!(words.history().len() <= HISTORY_LIMIT);
            let mut seen: Vec<&str> = words.history().iter().map(|e| e.word.word.as_str()).collect();
            let total = seen.len();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), total, "duplicate word after insert {i}");
        }
        assert_eq!(words.history().len(), HISTORY_LIMIT);
    }

    #[tokio::test]
    async fn research_moves_word_to_front_with_new_timestamp() {
        let mut words = WordStore::new(Arc::new(MemoryStore::new()));
        words.add_history_at(def("ephemeral"), stamp(1)).await;
        words.add_history_at(def("zenith"), stamp(2)).await;
        words.add_history_at(def("ephemeral"), stamp(3)).await;

        let history = words.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].word.word, "ephemeral");
        assert_eq!(history[0].timestamp, stamp(3));
        assert_eq!(history[1].word.word, "zenith");
    }

    #[tokio::test]
    async fn same_word_twice_keeps_one_entry() {
        let mut words = WordStore::new(Arc::new(MemoryStore::new()));
        let first = words.add_history(def("ephemeral")).await;
        let second = words.add_history(def("ephemeral")).await;

        assert_eq!(words.history().len(), 1);
        assert_eq!(words.history()[0].timestamp, second);
        assert!(second >= first);
        assert!(second.ends_with('Z'));
    }

    #[tokio::test]
    async fn oldest_entry_falls_off() {
        let mut words = WordStore::new(Arc::new(MemoryStore::new()));
        for i in 0..=HISTORY_LIMIT {
            words.add_history_at(def(&format!("w{i}")), stamp(i)).await;
        }
        assert_eq!(words.history().len(), HISTORY_LIMIT);
        assert_eq!(words.history()[0].word.word, format!("w{HISTORY_LIMIT}"));
        assert!(words.find("w0").is_none());
    }

    #[tokio::test]
    async fn remove_and_clear_history() {
        let mut words = WordStore::new(Arc::new(MemoryStore::new()));
        words.add_history_at(def("a"), stamp(1)).await;
        words.add_history_at(def("b"), stamp(2)).await;

        assert!(words.remove_history(&stamp(1)).await);
        assert!(!words.remove_history("1999-01-01T00:00:00.000Z").await);
        assert_eq!(words.history().len(), 1);
        assert_eq!(words.history()[0].word.word, "b");

        words.clear_history().await;
        assert!(words.history().is_empty());
    }

    #[tokio::test]
    async fn add_favorite_is_idempotent() {
        let mut words = WordStore::new(Arc::new(MemoryStore::new()));
        assert!(words.add_favorite(def("halcyon")).await);
        assert!(!words.add_favorite(def("halcyon")).await);
        assert_eq!(words.favorites().len(), 1);
    }

    #[tokio::test]
    async fn remove_then_add_restores_one_favorite() {
        let mut words = WordStore::new(Arc::new(MemoryStore::new()));
        words.add_favorite(def("halcyon")).await;
        words.add_favorite(def("zenith")).await;

        assert!(words.remove_favorite("halcyon").await);
        assert!(!words.remove_favorite("halcyon").await);
        words.add_favorite(def("halcyon")).await;

        let names: Vec<&str> = words.favorites().iter().map(|f| f.word.as_str()).collect();
        assert_eq!(names, vec!["zenith", "halcyon"]);
    }

    #[tokio::test]
    async fn toggle_flips_membership() {
        let mut words = WordStore::new(Arc::new(MemoryStore::new()));
        assert!(words.toggle_favorite(def("sonder")).await);
        assert!(words.is_favorite("sonder"));
        assert!(!words.toggle_favorite(def("sonder")).await);
        assert!(!words.is_favorite("sonder"));
    }

    #[tokio::test]
    async fn state_survives_reload() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        {
            let mut words = WordStore::new(store.clone());
            words.add_favorite(def("panacea")).await;
            words.add_history_at(def("bucolic"), stamp(1)).await;
        }

        let words = WordStore::load(store).await;
        assert!(words.is_favorite("panacea"));
        assert_eq!(words.history()[0].word.word, "bucolic");
        assert_eq!(words.history()[0].timestamp, stamp(1));
    }

    #[tokio::test]
    async fn malformed_storage_loads_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set("history", "not json").await.unwrap();
        store.set("favorites", r#"[{"word": "labyrinth"}]"#).await.unwrap();

        let words = WordStore::load(store).await;
        assert!(words.history().is_empty());
        assert!(words.is_favorite("labyrinth"));
    }

    #[tokio::test]
    async fn failed_write_keeps_memory_and_retries_later() {
        let store = Arc::new(FlakyStore::default());
        let mut words = WordStore::new(store.clone());

        store.set_failing(true);
        assert!(words.add_favorite(def("epiphany")).await);
        assert!(words.is_favorite("epiphany"));
        assert_eq!(words.pending_writes(), vec![StorageKey::Favorites]);
        assert_eq!(store.raw(StorageKey::Favorites).await, None);

        store.set_failing(false);
        // a history change also writes the pending favorites
        words.add_history_at(def("zenith"), stamp(1)).await;
        assert!(words.pending_writes().is_empty());
        assert!(store.raw(StorageKey::Favorites).await.unwrap().contains("epiphany"));
        assert_eq!(store.writes(), 2);
    }

    #[tokio::test]
    async fn flush_retries_pending_writes() {
        let store = Arc::new(FlakyStore::default());
        let mut words = WordStore::new(store.clone());

        store.set_failing(true);
        words.add_history_at(def("luminous"), stamp(1)).await;
        assert!(!words.flush().await);

        store.set_failing(false);
        assert!(words.flush().await);
        assert!(store.raw(StorageKey::History).await.unwrap().contains("luminous"));
    }
}
