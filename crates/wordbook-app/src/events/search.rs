use wordbook_core::word_of_day::related_words;
use wordbook_types::UiEvent;

use crate::context::AppContext;

pub const NOT_FOUND_MESSAGE: &str = "Word not found. Please try another word.";

pub async fn handle_search(ctx: &AppContext, query: &str) -> anyhow::Result<()> {
    let word = query.trim();
    if word.is_empty() {
        tracing::debug!("Ignoring empty search");
        return Ok(());
    }

    tracing::info!("Searching '{}'", word);

    match ctx.state.fetcher.fetch(word).await {
        Ok(definition) => {
            ctx.state
                .words
                .write()
                .await
                .add_history(definition.clone())
                .await;
            ctx.state
                .status
                .search
                .write()
                .await
                .found(definition.clone());
            ctx.show(UiEvent::ShowDefinition(definition)).await;
        }
        Err(e) => {
            tracing::error!("Error searching '{}': {e}", word);
            ctx.state
                .status
                .search
                .write()
                .await
                .failed(NOT_FOUND_MESSAGE.to_string());
            ctx.show(UiEvent::ShowError(NOT_FOUND_MESSAGE.to_string()))
                .await;
        }
    }

    Ok(())
}

/// Search the `index`-th (1-based) related word of the current word of the day
pub async fn handle_search_related(ctx: &AppContext, index: usize) -> anyhow::Result<()> {
    let word_of_day = ctx.state.status.word_of_day.read().await.clone();
    let Some(word_of_day) = word_of_day else {
        ctx.show(UiEvent::Status("No word of the day yet".to_string()))
            .await;
        return Ok(());
    };

    let related = related_words(&word_of_day.word);
    match index.checked_sub(1).and_then(|i| related.get(i)) {
        Some(word) => handle_search(ctx, word).await,
        None => {
            ctx.show(UiEvent::Status(format!(
                "Pick a related word between 1 and {}",
                related.len()
            )))
            .await;
            Ok(())
        }
    }
}
