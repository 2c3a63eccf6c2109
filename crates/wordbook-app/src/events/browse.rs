use wordbook_core::categories::{CATEGORIES, category_words, find_category};
use wordbook_types::{Difficulty, UiEvent};

use crate::context::AppContext;

use super::search::handle_search;

pub async fn handle_list_categories(ctx: &AppContext) -> anyhow::Result<()> {
    let categories = CATEGORIES.iter().map(|c| c.to_string()).collect();
    ctx.show(UiEvent::ShowCategories(categories)).await;
    Ok(())
}

/// Show a category's words at a level and remember them for `pick`
pub async fn handle_browse_category(
    ctx: &AppContext,
    category: &str,
    difficulty: Difficulty,
) -> anyhow::Result<()> {
    let Some(category) = find_category(category) else {
        ctx.show(UiEvent::Status(format!(
            "Unknown category '{}'. Try one of: {}",
            category.trim(),
            CATEGORIES.join(", ")
        )))
        .await;
        return Ok(());
    };

    let words: Vec<String> = category_words(category, difficulty)
        .iter()
        .map(|w| w.to_string())
        .collect();
    tracing::debug!("{} ({}): {} words", category, difficulty, words.len());
    *ctx.state.status.listed_words.write().await = words.clone();

    ctx.show(UiEvent::ShowWordList {
        category: category.to_string(),
        difficulty,
        words,
    })
    .await;
    Ok(())
}

/// Search the `index`-th (1-based) word of the last list shown
pub async fn handle_search_listed(ctx: &AppContext, index: usize) -> anyhow::Result<()> {
    let word = {
        let listed = ctx.state.status.listed_words.read().await;
        index.checked_sub(1).and_then(|i| listed.get(i)).cloned()
    };

    match word {
        Some(word) => handle_search(ctx, &word).await,
        None => {
            ctx.show(UiEvent::Status(
                "No such word in the list. Use `words <category> [level]` first.".to_string(),
            ))
            .await;
            Ok(())
        }
    }
}
