use wordbook_types::UiEvent;

use crate::context::AppContext;

pub async fn handle_list_history(ctx: &AppContext) -> anyhow::Result<()> {
    let history = ctx.state.words.read().await.history().to_vec();
    ctx.show(UiEvent::ShowHistory(history)).await;
    Ok(())
}

/// `key` is either an entry timestamp or its 1-based position in the listing
pub async fn handle_remove_history(ctx: &AppContext, key: &str) -> anyhow::Result<()> {
    let key = key.trim();
    let mut words = ctx.state.words.write().await;

    let timestamp = match key.parse::<usize>() {
        Ok(position) => position
            .checked_sub(1)
            .and_then(|i| words.history().get(i))
            .map(|entry| entry.timestamp.clone()),
        Err(_) => Some(key.to_string()),
    };

    let removed = match timestamp {
        Some(timestamp) => words.remove_history(&timestamp).await,
        None => false,
    };
    drop(words);

    let status = if removed {
        "Removed from history".to_string()
    } else {
        format!("No history entry '{key}'")
    };
    ctx.show(UiEvent::Status(status)).await;
    Ok(())
}

pub async fn handle_clear_history(ctx: &AppContext) -> anyhow::Result<()> {
    ctx.state.words.write().await.clear_history().await;
    ctx.show(UiEvent::Status("History cleared".to_string()))
        .await;
    Ok(())
}
