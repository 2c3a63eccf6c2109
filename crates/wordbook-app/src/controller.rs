use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordbook_config::Config;
use wordbook_core::speech::SpeechEvent;
use wordbook_types::AppEvent;

use crate::context::AppContext;
use crate::events::event_loop;
use crate::io::input_io;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    /// Speech engine callbacks, pumped into `ui_to_app`
    pub speech: (AsyncSender<SpeechEvent>, AsyncReceiver<SpeechEvent>),
}

impl ChannelSet {
    pub fn new(config: &Config) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(config.output_capacity.max(1)),
            ui_to_app: kanal::bounded_async(config.input_capacity.max(1)),
            speech: kanal::bounded_async(16),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(channels: ChannelSet, state: Arc<AppState>) -> Self {
        Self {
            channels,
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn context(&self) -> AppContext {
        AppContext::new(
            self.state.clone(),
            self.channels.ui_to_app.0.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.clone(),
        )
    }

    pub async fn spawn_tasks(&self, lines: AsyncReceiver<String>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.context(),
            self.channels.ui_to_app.1.clone(),
        ));

        // UI loop, ends on the event loop's Close
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.state.config.clone(),
        ));

        // Front-end input
        tasks.spawn(input_io(
            lines,
            self.channels.ui_to_app.0.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.clone(),
        ));

        // Speech callbacks
        tasks.spawn(speech_pump(
            self.channels.speech.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        if self.state.config.read().await.word_of_day.enabled {
            if let Err(e) = self
                .channels
                .ui_to_app
                .0
                .send(AppEvent::RefreshWordOfDay)
                .await
            {
                tracing::error!("Failed to request word of the day: {e}");
            }
        }

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

async fn speech_pump(
    speech_rx: AsyncReceiver<SpeechEvent>,
    app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let event = tokio::select! {
            event = speech_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
            _ = cancel.cancelled() => break,
        };
        if app_tx.send(AppEvent::Speech(event)).await.is_err() {
            break;
        }
    }
    Ok(())
}
