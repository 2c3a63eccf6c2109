use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding `settings.json`, `favorites.json` and `history.json`.
    /// Platform data dir when unset.
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn new() -> Self {
        Self {
            data_dir: env::var("WORDBOOK_DATA_DIR").ok().map(PathBuf::from),
        }
    }
}
