mod event_flow_tests;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use wordbook_api::{DefinitionFetcher, FetchError};
use wordbook_config::Config;
use wordbook_core::PlaybackError;
use wordbook_core::speech::SpeechEngine;
use wordbook_core::storage::{KeyValueStore, MemoryStore};
use wordbook_types::{AppEvent, Definition, UiEvent};

use crate::context::AppContext;
use crate::state::AppState;

/// Knows a fixed set of words, everything else is not found
pub struct StubFetcher {
    known: HashMap<String, Definition>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn new(words: &[&str]) -> Self {
        Self {
            known: words
                .iter()
                .map(|w| (w.to_string(), Definition::bare(*w)))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DefinitionFetcher for StubFetcher {
    async fn fetch(&self, word: &str) -> Result<Definition, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.known
            .get(word)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                word: word.to_string(),
                status: Some(404),
            })
    }
}

#[derive(Default)]
pub struct RecordingEngine {
    calls: Mutex<Vec<String>>,
}

impl RecordingEngine {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechEngine for RecordingEngine {
    async fn speak(&self, _id: u64, text: &str) -> Result<(), PlaybackError> {
        self.calls.lock().unwrap().push(format!("speak {text}"));
        Ok(())
    }

    async fn stop(&self) -> Result<(), PlaybackError> {
        self.calls.lock().unwrap().push("stop".to_string());
        Ok(())
    }
}

pub struct Harness {
    pub ctx: AppContext,
    pub fetcher: Arc<StubFetcher>,
    pub engine: Arc<RecordingEngine>,
    pub store: Arc<MemoryStore>,
    pub app_rx: AsyncReceiver<AppEvent>,
    pub ui_rx: AsyncReceiver<AppEvent>,
}

impl Harness {
    pub async fn new(words: &[&str]) -> Self {
        Self::with_store(words, Arc::new(MemoryStore::new())).await
    }

    pub async fn with_store(words: &[&str], store: Arc<MemoryStore>) -> Self {
        let fetcher = Arc::new(StubFetcher::new(words));
        let engine = Arc::new(RecordingEngine::default());
        let state = AppState::load(
            Config::new(),
            fetcher.clone(),
            store.clone() as Arc<dyn KeyValueStore>,
            engine.clone(),
        )
        .await;

        let (app_tx, app_rx) = kanal::unbounded_async();
        let (ui_tx, ui_rx) = kanal::unbounded_async();
        let ctx = AppContext::new(Arc::new(state), app_tx, ui_tx, CancellationToken::new());

        Self {
            ctx,
            fetcher,
            engine,
            store,
            app_rx,
            ui_rx,
        }
    }

    pub async fn send(&self, event: AppEvent) {
        crate::events::handle_events(&self.ctx, event)
            .await
            .expect("handler failed");
    }

    /// Next event for the front end
    pub async fn next_ui(&self) -> UiEvent {
        match tokio::time::timeout(Duration::from_secs(2), self.ui_rx.recv()).await {
            Ok(Ok(AppEvent::UiEvent(event))) => event,
            Ok(Ok(other)) => panic!("non-UI event on the UI channel: {other:?}"),
            Ok(Err(e)) => panic!("Channel error: {}", e),
            Err(_) => panic!("Timeout waiting for a UI event"),
        }
    }
}
