use wordbook_core::speech::SpeechEvent;
use wordbook_types::UiEvent;

use crate::context::AppContext;

/// Toggle speech for `word`, or the focused definition when no word is given
pub async fn handle_speak(ctx: &AppContext, word: Option<String>) -> anyhow::Result<()> {
    let word = match word.map(|w| w.trim().to_string()) {
        Some(word) if !word.is_empty() => Some(word),
        _ => ctx.state.status.focused().await.map(|def| def.word),
    };
    let Some(word) = word else {
        ctx.show(UiEvent::Status("Nothing to speak".to_string()))
            .await;
        return Ok(());
    };

    let result = ctx.state.playback.lock().await.toggle(&word).await;
    match result {
        Ok(true) => {
            ctx.show(UiEvent::Status(format!("Speaking '{word}'")))
                .await
        }
        Ok(false) => ctx.show(UiEvent::Status("Stopped".to_string())).await,
        Err(e) => {
            // playback already went back to idle
            ctx.show(UiEvent::ShowError(format!("Could not speak '{word}': {e}")))
                .await
        }
    }
    Ok(())
}

pub async fn handle_stop_speech(ctx: &AppContext) -> anyhow::Result<()> {
    if let Err(e) = ctx.state.playback.lock().await.stop().await {
        tracing::warn!("Speech engine did not stop cleanly: {e}");
    }
    ctx.show(UiEvent::Status("Stopped".to_string())).await;
    Ok(())
}

pub async fn handle_speech_event(ctx: &AppContext, event: SpeechEvent) {
    tracing::trace!("Speech event: {:?}", event);
    ctx.state.playback.lock().await.on_event(event);
}
