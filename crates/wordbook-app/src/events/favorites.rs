use wordbook_types::{Definition, UiEvent};

use crate::context::AppContext;

/// Bookmark `word`, or the focused definition when no word is given.
///
/// A named word is taken from what we already hold locally before asking the
/// remote dictionary.
pub async fn handle_add_favorite(ctx: &AppContext, word: Option<String>) -> anyhow::Result<()> {
    let definition = match word.as_deref().map(str::trim) {
        None | Some("") => ctx.state.status.focused().await,
        Some(word) => resolve(ctx, word).await,
    };

    let Some(definition) = definition else {
        ctx.show(UiEvent::Status("Nothing to add to favorites".to_string()))
            .await;
        return Ok(());
    };

    let word = definition.word.clone();
    let added = ctx.state.words.write().await.add_favorite(definition).await;
    let status = if added {
        format!("Added '{word}' to favorites")
    } else {
        format!("'{word}' is already a favorite")
    };
    ctx.show(UiEvent::Status(status)).await;

    Ok(())
}

pub async fn handle_remove_favorite(ctx: &AppContext, word: &str) -> anyhow::Result<()> {
    let word = word.trim();
    let removed = ctx.state.words.write().await.remove_favorite(word).await;
    let status = if removed {
        format!("Removed '{word}' from favorites")
    } else {
        format!("'{word}' is not a favorite")
    };
    ctx.show(UiEvent::Status(status)).await;
    Ok(())
}

pub async fn handle_list_favorites(ctx: &AppContext) -> anyhow::Result<()> {
    let favorites = ctx.state.words.read().await.favorites().to_vec();
    ctx.show(UiEvent::ShowFavorites(favorites)).await;
    Ok(())
}

async fn resolve(ctx: &AppContext, word: &str) -> Option<Definition> {
    if let Some(focused) = ctx
        .state
        .status
        .focused()
        .await
        .filter(|focused| focused.word == word)
    {
        return Some(focused);
    }
    if let Some(known) = ctx.state.words.read().await.find(word).cloned() {
        return Some(known);
    }

    match ctx.state.fetcher.fetch(word).await {
        Ok(definition) => Some(definition),
        Err(e) => {
            tracing::error!("Error fetching '{}' for favorites: {e}", word);
            None
        }
    }
}
