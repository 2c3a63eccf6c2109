use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use wordbook_api::DefinitionFetcher;
use wordbook_config::Config;
use wordbook_core::settings::SettingsStore;
use wordbook_core::speech::{Playback, SpeechEngine};
use wordbook_core::storage::KeyValueStore;
use wordbook_core::words::WordStore;

use crate::status::AppStatus;

/// Root of all application state, built once in `main` and shared by `Arc`
pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub fetcher: Arc<dyn DefinitionFetcher>,
    pub words: RwLock<WordStore>,
    pub settings: RwLock<SettingsStore>,
    pub playback: Mutex<Playback>,
    pub status: AppStatus,
}

impl AppState {
    /// Load favorites, history and settings from `store`
    pub async fn load(
        config: Config,
        fetcher: Arc<dyn DefinitionFetcher>,
        store: Arc<dyn KeyValueStore>,
        engine: Arc<dyn SpeechEngine>,
    ) -> Self {
        let words = WordStore::load(store.clone()).await;
        let settings = SettingsStore::load(store).await;

        Self {
            config: Arc::new(RwLock::new(config)),
            fetcher,
            words: RwLock::new(words),
            settings: RwLock::new(settings),
            playback: Mutex::new(Playback::new(engine)),
            status: AppStatus::new(),
        }
    }

    /// Retry storage writes that failed earlier. Returns true when nothing is left pending.
    pub async fn flush(&self) -> bool {
        let words_ok = self.words.write().await.flush().await;
        let settings_ok = self.settings.write().await.flush().await;
        if !(words_ok && settings_ok) {
            tracing::error!("Some changes could not be saved");
        }
        words_ok && settings_ok
    }
}
