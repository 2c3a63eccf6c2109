use std::sync::atomic::Ordering;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordbook_core::word_of_day::{CURATED_WORDS, WordOfDaySelector, related_words};
use wordbook_types::{AppEvent, Definition, UiEvent};

use crate::context::AppContext;

/// Pick a word of the day in the background; the result comes back as
/// [`AppEvent::WordOfDayReady`]
pub async fn start_word_of_day(ctx: &AppContext) {
    let state = &ctx.state;

    // Don't start again if already running
    if state.status.word_of_day_running.swap(true, Ordering::SeqCst) {
        tracing::debug!("Word of the day already loading");
        return;
    }

    let max_attempts = state.config.read().await.word_of_day.max_attempts;
    let ctx_clone = ctx.clone();

    tokio::spawn(async move {
        let fetcher = ctx_clone.state.fetcher.clone();
        let selector = WordOfDaySelector::new(CURATED_WORDS, max_attempts);
        let mut rng = StdRng::from_entropy();

        let picked = tokio::select! {
            picked = selector.pick(fetcher.as_ref(), &mut rng) => picked,
            _ = ctx_clone.cancel.cancelled() => {
                tracing::debug!("Word of the day cancelled");
                None
            }
        };

        ctx_clone
            .state
            .status
            .word_of_day_running
            .store(false, Ordering::SeqCst);

        match picked {
            Some(definition) => {
                if ctx_clone.cancel.is_cancelled() {
                    return;
                }
                if let Err(e) = ctx_clone
                    .app_tx
                    .send(AppEvent::WordOfDayReady(definition))
                    .await
                {
                    tracing::debug!("Event loop gone, dropping word of the day: {e}");
                }
            }
            None => {
                tracing::warn!("No word of the day this time");
            }
        }
    });
}

pub async fn handle_word_of_day_ready(
    ctx: &AppContext,
    definition: Definition,
) -> anyhow::Result<()> {
    tracing::info!("Word of the day: '{}'", definition.word);
    *ctx.state.status.word_of_day.write().await = Some(definition.clone());

    let related = related_words(&definition.word)
        .iter()
        .map(|word| word.to_string())
        .collect();
    ctx.show(UiEvent::ShowWordOfDay {
        definition,
        related,
    })
    .await;
    Ok(())
}
