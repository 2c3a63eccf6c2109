use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use kanal::AsyncSender;
use tokio::process::Command;
use tokio::sync::{Mutex, oneshot};
use wordbook_config::speech::SpeechConfig;
use wordbook_core::PlaybackError;
use wordbook_core::speech::{SpeechEngine, SpeechEvent};

/// Words per minute at rate 0.5
const NORMAL_WPM: f32 = 175.0;

fn default_program() -> &'static str {
    if cfg!(target_os = "macos") { "say" } else { "espeak" }
}

/// Speaks by running a platform TTS program, one child process per utterance
pub struct CommandSpeaker {
    program: String,
    config: SpeechConfig,
    events: AsyncSender<SpeechEvent>,
    /// Dropping or firing this ends the running utterance
    current: Mutex<Option<oneshot::Sender<()>>>,
}

impl CommandSpeaker {
    pub fn new(config: SpeechConfig, events: AsyncSender<SpeechEvent>) -> Self {
        let program = config
            .command
            .clone()
            .unwrap_or_else(|| default_program().to_string());
        tracing::info!("Using speech command '{}'", program);

        Self {
            program,
            config,
            events,
            current: Mutex::new(None),
        }
    }

    /// Arguments for `text`, shaped after the program's command line
    pub fn args(&self, text: &str) -> Vec<String> {
        let wpm = (NORMAL_WPM * self.config.rate * 2.0).round().max(1.0) as u32;
        let name = Path::new(&self.program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.program);

        match name {
            "say" => vec!["-r".to_string(), wpm.to_string(), "--".to_string(), text.to_string()],
            "espeak" | "espeak-ng" => {
                let pitch = (self.config.pitch * 50.0).round().clamp(0.0, 99.0) as u32;
                vec![
                    "-v".to_string(),
                    self.config.language.to_lowercase(),
                    "-s".to_string(),
                    wpm.to_string(),
                    "-p".to_string(),
                    pitch.to_string(),
                    "--".to_string(),
                    text.to_string(),
                ]
            }
            // unknown programs just get the text
            _ => vec![text.to_string()],
        }
    }
}

#[async_trait]
impl SpeechEngine for CommandSpeaker {
    async fn speak(&self, id: u64, text: &str) -> Result<(), PlaybackError> {
        let mut child = Command::new(&self.program)
            .args(self.args(text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| PlaybackError::Spawn {
                command: self.program.clone(),
                source,
            })?;

        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        // replacing the sender cancels an utterance nobody stopped
        *self.current.lock().await = Some(cancel_tx);

        let events = self.events.clone();
        let text = text.to_string();
        let started = SpeechEvent::Started {
            id,
            word: text.clone(),
        };
        if let Err(e) = events.send(started).await {
            tracing::warn!("Failed to send speech start: {e}");
        }

        tokio::spawn(async move {
            let event = tokio::select! {
                status = child.wait() => match status {
                    Ok(status) if status.success() => SpeechEvent::Finished { id, word: text },
                    Ok(status) => {
                        tracing::warn!("Speech command exited with {status}");
                        SpeechEvent::Cancelled { id, word: text }
                    }
                    Err(e) => {
                        tracing::error!("Error waiting for speech command: {e}");
                        SpeechEvent::Cancelled { id, word: text }
                    }
                },
                _ = cancel_rx => {
                    if let Err(e) = child.kill().await {
                        tracing::warn!("Failed to kill speech command: {e}");
                    }
                    SpeechEvent::Cancelled { id, word: text }
                }
            };

            if let Err(e) = events.send(event).await {
                tracing::debug!("Speech event dropped: {e}");
            }
        });

        Ok(())
    }

    async fn stop(&self) -> Result<(), PlaybackError> {
        if let Some(cancel) = self.current.lock().await.take() {
            // the utterance may already be over, which is fine
            let _ = cancel.send(());
        }
        Ok(())
    }
}

/// Engine used when speech is turned off in the config
pub struct DisabledSpeaker;

#[async_trait]
impl SpeechEngine for DisabledSpeaker {
    async fn speak(&self, _id: u64, _text: &str) -> Result<(), PlaybackError> {
        Err(PlaybackError::Unsupported(
            "speech is disabled in the config".to_string(),
        ))
    }

    async fn stop(&self) -> Result<(), PlaybackError> {
        Ok(())
    }
}
