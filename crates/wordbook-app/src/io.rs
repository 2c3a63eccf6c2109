use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use wordbook_types::{AppEvent, Difficulty, UiEvent};

/// What one input line asks for
#[derive(Debug)]
pub enum Command {
    App(AppEvent),
    Quit,
    /// Unusable line, with the message to show
    Invalid(String),
}

/// Turn a front-end line into a command. A line that is not a command is a search.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    let event = match head.to_ascii_lowercase().as_str() {
        "search" | "s" => match arg {
            Some(word) => AppEvent::Search(word),
            None => return Command::Invalid("usage: search <word>".to_string()),
        },
        "fav" => AppEvent::AddFavorite(arg),
        "unfav" => match arg {
            Some(word) => AppEvent::RemoveFavorite(word),
            None => return Command::Invalid("usage: unfav <word>".to_string()),
        },
        "favorites" | "favs" => AppEvent::ListFavorites,
        "history" => AppEvent::ListHistory,
        "forget" => match arg {
            Some(key) => AppEvent::RemoveHistory(key),
            None => return Command::Invalid("usage: forget <timestamp|n>".to_string()),
        },
        "clear" => AppEvent::ClearHistory,
        "show" => match rest.parse::<usize>() {
            Ok(position) => AppEvent::OpenHistory(position),
            Err(_) => return Command::Invalid("usage: show <n>".to_string()),
        },
        "open" => match arg {
            Some(word) => AppEvent::OpenSaved(word),
            None => return Command::Invalid("usage: open <word>".to_string()),
        },
        "words" => match arg {
            None => AppEvent::ListCategories,
            Some(rest) => browse_event(&rest),
        },
        "pick" => match rest.parse::<usize>() {
            Ok(index) => AppEvent::SearchListed(index),
            Err(_) => return Command::Invalid("usage: pick <n>".to_string()),
        },
        "say" => AppEvent::Speak(arg),
        "stop" => AppEvent::StopSpeech,
        "dark" => AppEvent::ToggleDarkMode,
        "font" => match rest.parse::<u32>() {
            Ok(size) => AppEvent::SetFontSize(size),
            Err(_) => return Command::Invalid("usage: font <size>".to_string()),
        },
        "settings" => AppEvent::ShowSettings,
        "wotd" => AppEvent::RefreshWordOfDay,
        "related" => match rest.parse::<usize>() {
            Ok(index) => AppEvent::SearchRelated(index),
            Err(_) => return Command::Invalid("usage: related <n>".to_string()),
        },
        "help" | "?" => AppEvent::UiEvent(UiEvent::Help),
        "quit" | "exit" | "q" => return Command::Quit,
        _ => AppEvent::Search(line.to_string()),
    };

    Command::App(event)
}

/// `<category> [level]`; the level is the last word when it names one
fn browse_event(rest: &str) -> AppEvent {
    if let Some((category, level)) = rest.rsplit_once(char::is_whitespace) {
        if let Ok(difficulty) = level.parse::<Difficulty>() {
            return AppEvent::BrowseCategory {
                category: category.trim().to_string(),
                difficulty,
            };
        }
    }
    AppEvent::BrowseCategory {
        category: rest.to_string(),
        difficulty: Difficulty::default(),
    }
}

/// Forward front-end lines to the event loop until quit, EOF or cancellation.
///
/// Quit cancels the token only after every earlier command was queued; the
/// event loop drains its queue before it notices.
pub async fn input_io(
    lines: AsyncReceiver<String>,
    app_tx: AsyncSender<AppEvent>,
    ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let line = tokio::select! {
            line = lines.recv() => match line {
                Ok(line) => line,
                Err(_) => {
                    tracing::info!("Input closed");
                    break;
                }
            },
            _ = cancel.cancelled() => break,
        };

        match parse_command(&line) {
            Command::App(event) => {
                if let Err(e) = app_tx.send(event).await {
                    tracing::error!("Failed to send command to app: {e}");
                    break;
                }
            }
            Command::Invalid(message) => {
                let _ = ui_tx
                    .send(AppEvent::UiEvent(UiEvent::Status(message)))
                    .await;
            }
            Command::Quit => break,
        }
    }

    tracing::info!("Input stopping");
    cancel.cancel();
    Ok(())
}
