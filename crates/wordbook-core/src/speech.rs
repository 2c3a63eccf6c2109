use std::sync::Arc;

use async_trait::async_trait;
pub use wordbook_types::SpeechEvent;

use crate::error::PlaybackError;

/// Text-to-speech backend.
///
/// `speak` returns once the utterance was handed to the engine. Progress is
/// reported separately as [`SpeechEvent`]s tagged with `id`.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    async fn speak(&self, id: u64, text: &str) -> Result<(), PlaybackError>;

    async fn stop(&self) -> Result<(), PlaybackError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Speaking(String),
}

/// Tracks which word, if any, is being spoken
pub struct Playback {
    engine: Arc<dyn SpeechEngine>,
    state: PlaybackState,
    next_id: u64,
    /// Utterance whose events still count
    current: Option<u64>,
}

impl Playback {
    pub fn new(engine: Arc<dyn SpeechEngine>) -> Self {
        Self {
            engine,
            state: PlaybackState::Idle,
            next_id: 1,
            current: None,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_word(&self) -> Option<&str> {
        match &self.state {
            PlaybackState::Speaking(word) => Some(word),
            PlaybackState::Idle => None,
        }
    }

    /// Id of the utterance in progress
    pub fn current_utterance(&self) -> Option<u64> {
        self.current
    }

    pub fn is_playing(&self, word: &str) -> bool {
        self.current_word() == Some(word)
    }

    /// Speak `word`, interrupting whatever is playing
    pub async fn play(&mut self, word: &str) -> Result<(), PlaybackError> {
        if let PlaybackState::Speaking(current) = &self.state {
            tracing::debug!("Interrupting '{}' for '{}'", current, word);
            if let Err(e) = self.engine.stop().await {
                tracing::warn!("Error stopping audio: {e}");
            }
            self.idle();
        }

        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(id);
        self.state = PlaybackState::Speaking(word.to_string());
        if let Err(e) = self.engine.speak(id, word).await {
            tracing::error!("Error playing audio: {e}");
            self.idle();
            return Err(e);
        }
        Ok(())
    }

    /// Always ends Idle, even when the engine fails to stop
    pub async fn stop(&mut self) -> Result<(), PlaybackError> {
        let result = self.engine.stop().await;
        if let Err(e) = &result {
            tracing::error!("Error stopping audio: {e}");
        }
        self.idle();
        result
    }

    /// Stop `word` if it is playing, otherwise play it. Returns whether it is playing now.
    pub async fn toggle(&mut self, word: &str) -> Result<bool, PlaybackError> {
        if self.is_playing(word) {
            self.stop().await?;
            Ok(false)
        } else {
            self.play(word).await?;
            Ok(true)
        }
    }

    /// Apply an engine callback. Events of any utterance other than the
    /// current one come from an interrupted or stopped utterance and are ignored.
    pub fn on_event(&mut self, event: SpeechEvent) {
        if self.current != Some(event.id()) {
            tracing::trace!(
                "Ignoring stale speech event for '{}' (utterance {})",
                event.word(),
                event.id()
            );
            return;
        }
        match event {
            SpeechEvent::Started { word, .. } => {
                self.state = PlaybackState::Speaking(word);
            }
            SpeechEvent::Finished { .. } | SpeechEvent::Cancelled { .. } => {
                self.idle();
            }
        }
    }

    fn idle(&mut self) {
        self.state = PlaybackState::Idle;
        self.current = None;
    }
}
