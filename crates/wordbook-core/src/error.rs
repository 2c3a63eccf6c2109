use std::io;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed value under '{key}': {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("Failed to start speech command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Speech engine error: {0}")]
    Engine(String),

    #[error("Speech unsupported: {0}")]
    Unsupported(String),
}
