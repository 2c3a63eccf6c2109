use kanal::AsyncReceiver;
use wordbook_types::{AppEvent, UiEvent};

use crate::context::AppContext;

pub mod browse;
pub mod favorites;
pub mod history;
pub mod open;
pub mod search;
pub mod settings;
pub mod speak;
pub mod word_of_day;

use browse::{handle_browse_category, handle_list_categories, handle_search_listed};
use favorites::{handle_add_favorite, handle_list_favorites, handle_remove_favorite};
use history::{handle_clear_history, handle_list_history, handle_remove_history};
use open::{handle_open_history, handle_open_saved};
use search::{handle_search, handle_search_related};
use settings::{handle_set_font_size, handle_show_settings, handle_toggle_dark_mode};
use speak::{handle_speak, handle_speech_event, handle_stop_speech};
use word_of_day::{handle_word_of_day_ready, start_word_of_day};

/// App's main loop, one event at a time.
///
/// Events already queued are handled before a cancellation is noticed, so
/// commands typed right before `quit` still run. The front end is told to
/// close once the loop is done, whatever the reason.
pub async fn event_loop(ctx: AppContext, app_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    let result = run_events(&ctx, &app_rx).await;
    if let Err(e) = &result {
        tracing::error!("[EVENT_LOOP] Stopped on error: {e}");
    }
    ctx.show(UiEvent::Close).await;
    result
}

async fn run_events(ctx: &AppContext, app_rx: &AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    loop {
        let event = tokio::select! {
            biased;
            event = app_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => {
                    tracing::info!("[EVENT_LOOP] Input closed");
                    break;
                }
            },
            _ = ctx.cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        handle_events(ctx, event).await?;
    }

    Ok(())
}

pub async fn handle_events(ctx: &AppContext, event: AppEvent) -> anyhow::Result<()> {
    match event {
        AppEvent::Search(word) => {
            handle_search(ctx, &word).await?;
        }
        AppEvent::SearchRelated(index) => {
            handle_search_related(ctx, index).await?;
        }
        AppEvent::AddFavorite(word) => {
            handle_add_favorite(ctx, word).await?;
        }
        AppEvent::RemoveFavorite(word) => {
            handle_remove_favorite(ctx, &word).await?;
        }
        AppEvent::ListFavorites => {
            handle_list_favorites(ctx).await?;
        }
        AppEvent::ListHistory => {
            handle_list_history(ctx).await?;
        }
        AppEvent::RemoveHistory(key) => {
            handle_remove_history(ctx, &key).await?;
        }
        AppEvent::ClearHistory => {
            handle_clear_history(ctx).await?;
        }
        AppEvent::OpenHistory(position) => {
            handle_open_history(ctx, position).await?;
        }
        AppEvent::OpenSaved(word) => {
            handle_open_saved(ctx, &word).await?;
        }
        AppEvent::ListCategories => {
            handle_list_categories(ctx).await?;
        }
        AppEvent::BrowseCategory {
            category,
            difficulty,
        } => {
            handle_browse_category(ctx, &category, difficulty).await?;
        }
        AppEvent::SearchListed(index) => {
            handle_search_listed(ctx, index).await?;
        }
        AppEvent::Speak(word) => {
            handle_speak(ctx, word).await?;
        }
        AppEvent::StopSpeech => {
            handle_stop_speech(ctx).await?;
        }
        AppEvent::Speech(event) => {
            handle_speech_event(ctx, event).await;
        }
        AppEvent::ToggleDarkMode => {
            handle_toggle_dark_mode(ctx).await?;
        }
        AppEvent::SetFontSize(size) => {
            handle_set_font_size(ctx, size).await?;
        }
        AppEvent::ShowSettings => {
            handle_show_settings(ctx).await?;
        }
        AppEvent::RefreshWordOfDay => {
            start_word_of_day(ctx).await;
        }
        AppEvent::WordOfDayReady(definition) => {
            handle_word_of_day_ready(ctx, definition).await?;
        }
        AppEvent::UiEvent(event) => {
            // requests that only the front end can answer, e.g. help
            ctx.show(event).await;
        }
    }

    Ok(())
}
