use std::sync::Arc;

use wordbook_core::speech::{PlaybackState, SpeechEvent};
use wordbook_core::storage::{KeyValueStore, MemoryStore};
use wordbook_types::{AppEvent, Definition, HistoryEntry, UiEvent};

use super::Harness;
use crate::events::search::NOT_FOUND_MESSAGE;

#[tokio::test]
async fn test_search_twice_keeps_one_history_entry() {
    let h = Harness::new(&["ephemeral"]).await;

    for _ in 0..2 {
        h.send(AppEvent::Search("ephemeral".to_string())).await;
        match h.next_ui().await {
            UiEvent::ShowDefinition(def) => assert_eq!(def.word, "ephemeral"),
            other => panic!("Wrong event type: {other:?}"),
        }
    }

    let words = h.ctx.state.words.read().await;
    assert_eq!(words.history().len(), 1);
    assert_eq!(words.history()[0].word.word, "ephemeral");
}

#[tokio::test]
async fn test_unknown_word_shows_error_and_skips_history() {
    let h = Harness::new(&["ephemeral"]).await;

    h.send(AppEvent::Search("ephemeral".to_string())).await;
    h.next_ui().await;
    h.send(AppEvent::Search("zzzqq".to_string())).await;

    match h.next_ui().await {
        UiEvent::ShowError(message) => assert_eq!(message, NOT_FOUND_MESSAGE),
        other => panic!("Wrong event type: {other:?}"),
    }
    assert_eq!(h.ctx.state.words.read().await.history().len(), 1);

    let search = h.ctx.state.status.search.read().await;
    assert!(search.current.is_none());
    assert_eq!(search.error.as_deref(), Some(NOT_FOUND_MESSAGE));
}

#[tokio::test]
async fn test_blank_search_is_ignored() {
    let h = Harness::new(&["ephemeral"]).await;

    h.send(AppEvent::Search("   ".to_string())).await;

    assert_eq!(h.fetcher.calls(), 0);
    assert!(h.ui_rx.is_empty());
    assert!(h.ctx.state.words.read().await.history().is_empty());
}

#[tokio::test]
async fn test_favorite_focused_word_once() {
    let h = Harness::new(&["zenith"]).await;

    h.send(AppEvent::Search("zenith".to_string())).await;
    h.next_ui().await;

    h.send(AppEvent::AddFavorite(None)).await;
    assert!(matches!(h.next_ui().await, UiEvent::Status(s) if s.contains("Added")));
    h.send(AppEvent::AddFavorite(Some("zenith".to_string()))).await;
    assert!(matches!(h.next_ui().await, UiEvent::Status(s) if s.contains("already")));

    // only the search hit the network
    assert_eq!(h.fetcher.calls(), 1);

    let saved = h.store.get("favorites").await.unwrap().unwrap();
    let saved: Vec<Definition> = serde_json::from_str(&saved).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].word, "zenith");

    h.send(AppEvent::RemoveFavorite("zenith".to_string())).await;
    h.next_ui().await;
    h.send(AppEvent::ListFavorites).await;
    assert!(matches!(h.next_ui().await, UiEvent::ShowFavorites(favs) if favs.is_empty()));
}

#[tokio::test]
async fn test_favorite_unknown_word_fetches_it() {
    let h = Harness::new(&["halcyon"]).await;

    h.send(AppEvent::AddFavorite(Some("halcyon".to_string()))).await;
    h.next_ui().await;
    assert!(h.ctx.state.words.read().await.is_favorite("halcyon"));
    assert_eq!(h.fetcher.calls(), 1);

    h.send(AppEvent::AddFavorite(Some("zzzqq".to_string()))).await;
    assert!(matches!(h.next_ui().await, UiEvent::Status(s) if s.contains("Nothing")));
    assert_eq!(h.ctx.state.words.read().await.favorites().len(), 1);
}

#[tokio::test]
async fn test_forget_by_position_and_clear() {
    let h = Harness::new(&["panacea", "bucolic", "zenith"]).await;
    for word in ["panacea", "bucolic", "zenith"] {
        h.send(AppEvent::Search(word.to_string())).await;
        h.next_ui().await;
    }

    // newest first: zenith, bucolic, panacea
    h.send(AppEvent::RemoveHistory("2".to_string())).await;
    h.next_ui().await;
    h.send(AppEvent::ListHistory).await;
    match h.next_ui().await {
        UiEvent::ShowHistory(history) => {
            let words: Vec<_> = history.iter().map(|e| e.word.word.as_str()).collect();
            assert_eq!(words, ["zenith", "panacea"]);
        }
        other => panic!("Wrong event type: {other:?}"),
    }

    h.send(AppEvent::RemoveHistory("9".to_string())).await;
    assert!(matches!(h.next_ui().await, UiEvent::Status(s) if s.contains("No history entry")));

    h.send(AppEvent::ClearHistory).await;
    h.next_ui().await;
    assert!(h.ctx.state.words.read().await.history().is_empty());
}

#[tokio::test]
async fn test_history_survives_reload() {
    let store = Arc::new(MemoryStore::new());
    {
        let h = Harness::with_store(&["labyrinth"], store.clone()).await;
        h.send(AppEvent::Search("labyrinth".to_string())).await;
        h.send(AppEvent::ToggleDarkMode).await;
        h.send(AppEvent::SetFontSize(20)).await;
    }

    let h = Harness::with_store(&[], store).await;
    let history: Vec<HistoryEntry> = h.ctx.state.words.read().await.history().to_vec();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].word.word, "labyrinth");

    let settings = h.ctx.state.settings.read().await.settings();
    assert!(settings.dark_mode);
    assert_eq!(settings.font_size, 20);
}

#[tokio::test]
async fn test_say_toggles_and_ignores_stale_events() {
    let h = Harness::new(&["sonder"]).await;

    h.send(AppEvent::Speak(Some("sonder".to_string()))).await;
    h.next_ui().await;
    let sonder = h.ctx.state.playback.lock().await.current_utterance().unwrap();
    h.send(AppEvent::Speak(Some("petrichor".to_string()))).await;
    h.next_ui().await;

    // finish of the interrupted word arrives late
    h.send(AppEvent::Speech(SpeechEvent::Cancelled {
        id: sonder,
        word: "sonder".to_string(),
    }))
    .await;
    assert_eq!(
        h.ctx.state.playback.lock().await.state(),
        &PlaybackState::Speaking("petrichor".to_string())
    );

    h.send(AppEvent::Speak(Some("petrichor".to_string()))).await;
    assert!(matches!(h.next_ui().await, UiEvent::Status(s) if s == "Stopped"));
    assert_eq!(
        h.engine.calls(),
        ["speak sonder", "stop", "speak petrichor", "stop"]
    );
    assert_eq!(h.ctx.state.playback.lock().await.state(), &PlaybackState::Idle);
}

#[tokio::test]
async fn test_replay_survives_cancel_of_earlier_utterance() {
    let h = Harness::new(&[]).await;

    h.send(AppEvent::Speak(Some("zenith".to_string()))).await;
    h.next_ui().await;
    let first = h.ctx.state.playback.lock().await.current_utterance().unwrap();
    h.send(AppEvent::Speak(Some("zenith".to_string()))).await;
    assert!(matches!(h.next_ui().await, UiEvent::Status(s) if s == "Stopped"));
    h.send(AppEvent::Speak(Some("zenith".to_string()))).await;
    assert!(matches!(h.next_ui().await, UiEvent::Status(s) if s.starts_with("Speaking")));

    // same word, but from the stopped utterance
    h.send(AppEvent::Speech(SpeechEvent::Cancelled {
        id: first,
        word: "zenith".to_string(),
    }))
    .await;
    assert!(h.ctx.state.playback.lock().await.is_playing("zenith"));

    let replay = h.ctx.state.playback.lock().await.current_utterance().unwrap();
    assert_ne!(replay, first);
    h.send(AppEvent::Speech(SpeechEvent::Finished {
        id: replay,
        word: "zenith".to_string(),
    }))
    .await;
    assert_eq!(h.ctx.state.playback.lock().await.state(), &PlaybackState::Idle);
}

#[tokio::test]
async fn test_say_without_word_uses_search_result() {
    let h = Harness::new(&["eloquent"]).await;

    h.send(AppEvent::Speak(None)).await;
    assert!(matches!(h.next_ui().await, UiEvent::Status(s) if s == "Nothing to speak"));

    h.send(AppEvent::Search("eloquent".to_string())).await;
    h.next_ui().await;
    h.send(AppEvent::Speak(None)).await;
    h.next_ui().await;
    assert!(h.ctx.state.playback.lock().await.is_playing("eloquent"));
}

#[tokio::test]
async fn test_settings_events_show_settings() {
    let h = Harness::new(&[]).await;

    h.send(AppEvent::ToggleDarkMode).await;
    match h.next_ui().await {
        UiEvent::ShowSettings(settings) => assert!(settings.dark_mode),
        other => panic!("Wrong event type: {other:?}"),
    }

    h.send(AppEvent::SetFontSize(22)).await;
    match h.next_ui().await {
        UiEvent::ShowSettings(settings) => assert_eq!(settings.font_size, 22),
        other => panic!("Wrong event type: {other:?}"),
    }
}
