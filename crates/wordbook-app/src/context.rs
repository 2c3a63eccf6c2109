use std::sync::Arc;

use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use wordbook_types::{AppEvent, UiEvent};

use crate::state::AppState;

/// Shared handles every event handler needs
///
/// `app_tx` feeds events back into the event loop (background task results),
/// `ui_tx` goes to the front end.
#[derive(Clone)]
pub struct AppContext {
    pub state: Arc<AppState>,
    pub app_tx: AsyncSender<AppEvent>,
    pub ui_tx: AsyncSender<AppEvent>,
    pub cancel: CancellationToken,
}

impl AppContext {
    pub fn new(
        state: Arc<AppState>,
        app_tx: AsyncSender<AppEvent>,
        ui_tx: AsyncSender<AppEvent>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            state,
            app_tx,
            ui_tx,
            cancel,
        }
    }

    /// Send to the front end. A closed front end is logged, not an error.
    pub async fn show(&self, event: UiEvent) {
        if let Err(e) = self.ui_tx.send(AppEvent::UiEvent(event)).await {
            tracing::debug!("UI gone, dropping event: {e}");
        }
    }
}
