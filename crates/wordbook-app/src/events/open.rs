use wordbook_types::{Definition, UiEvent};

use crate::context::AppContext;

/// Show the `position`-th (1-based) history entry as stored.
/// Nothing is fetched and the history order is left alone.
pub async fn handle_open_history(ctx: &AppContext, position: usize) -> anyhow::Result<()> {
    let definition = {
        let words = ctx.state.words.read().await;
        position
            .checked_sub(1)
            .and_then(|i| words.history().get(i))
            .map(|entry| entry.word.clone())
    };

    match definition {
        Some(definition) => show_stored(ctx, definition).await,
        None => {
            ctx.show(UiEvent::Status(format!("No history entry {position}")))
                .await
        }
    }
    Ok(())
}

/// Show a favorite or history definition by word, without fetching
pub async fn handle_open_saved(ctx: &AppContext, word: &str) -> anyhow::Result<()> {
    let word = word.trim();
    let definition = ctx.state.words.read().await.find(word).cloned();

    match definition {
        Some(definition) => show_stored(ctx, definition).await,
        None => {
            ctx.show(UiEvent::Status(format!(
                "'{word}' is not in favorites or history"
            )))
            .await
        }
    }
    Ok(())
}

async fn show_stored(ctx: &AppContext, definition: Definition) {
    ctx.state
        .status
        .search
        .write()
        .await
        .found(definition.clone());
    ctx.show(UiEvent::ShowDefinition(definition)).await;
}
