use std::sync::Arc;

use wordbook_types::{Settings, Theme};

use crate::storage::{KeyValueStore, StorageKey, load_json, save_json};

/// Appearance settings mirrored to the `settings` key.
///
/// Write failures follow the same rule as [`crate::words::WordStore`]: memory
/// wins, the failure is logged and the value is written again next time.
pub struct SettingsStore {
    store: Arc<dyn KeyValueStore>,
    settings: Settings,
    pending: bool,
}

impl SettingsStore {
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let settings = match load_json::<Settings>(store.as_ref(), StorageKey::Settings).await {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                tracing::error!("Error loading settings: {e}");
                Settings::default()
            }
        };
        tracing::debug!("Settings: {:?}", settings);

        Self {
            store,
            settings,
            pending: false,
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme()
    }

    /// Returns the new dark mode flag
    pub async fn toggle_dark_mode(&mut self) -> bool {
        self.settings.dark_mode = !self.settings.dark_mode;
        self.save().await;
        self.settings.dark_mode
    }

    /// Any size is accepted; [`wordbook_types::FONT_SIZE_PRESETS`] lists the usual ones
    pub async fn update_font_size(&mut self, size: u32) {
        self.settings.font_size = size;
        self.save().await;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Retry a failed write. Returns true when storage matches memory.
    pub async fn flush(&mut self) -> bool {
        if self.pending {
            self.save().await;
        }
        !self.pending
    }

    async fn save(&mut self) {
        match save_json(self.store.as_ref(), StorageKey::Settings, &self.settings).await {
            Ok(()) => self.pending = false,
            Err(e) => {
                tracing::error!("Error saving settings, will retry on next change: {e}");
                self.pending = true;
            }
        }
    }
}
