use std::fmt::Write as _;
use std::io::Write as _;
use std::sync::Arc;

use chrono::{DateTime, Local};
use kanal::AsyncReceiver;
use tokio::sync::RwLock;
use wordbook_config::Config;
use wordbook_config::ui::UiConfig;
use wordbook_types::{AppEvent, Definition, Difficulty, HistoryEntry, Settings, UiEvent};

/// Line front end: prints whatever the app sends until told to close.
///
/// Not tied to the cancellation token: output the event loop produced while
/// shutting down is still printed, [`UiEvent::Close`] comes after it.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    print_out(&render_help(), interactive);

    while let Ok(event) = app_to_ui_rx.recv().await {
        let AppEvent::UiEvent(event) = event else {
            tracing::warn!("UI ignoring non-UI event");
            continue;
        };
        if matches!(event, UiEvent::Close) {
            break;
        }

        let ui_config = config.read().await.ui.clone();
        print_out(&render(&event, &ui_config), interactive);
    }

    tracing::info!("UI stopping");
    Ok(())
}

fn print_out(text: &str, prompt: bool) {
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "{text}");
    if prompt {
        let _ = write!(stdout, "> ");
    }
    let _ = stdout.flush();
}

pub fn render(event: &UiEvent, config: &UiConfig) -> String {
    match event {
        UiEvent::ShowDefinition(definition) => render_definition(definition, config),
        UiEvent::ShowWordOfDay {
            definition,
            related,
        } => {
            let mut out = String::from("== Word of the Day ==\n");
            out.push_str(&render_definition(definition, config));
            if !related.is_empty() {
                out.push_str("\nRelated:");
                for (i, word) in related.iter().enumerate() {
                    let _ = write!(out, " {}) {}", i + 1, word);
                }
            }
            out
        }
        UiEvent::ShowFavorites(favorites) => render_favorites(favorites),
        UiEvent::ShowHistory(history) => render_history(history),
        UiEvent::ShowSettings(settings) => render_settings(settings),
        UiEvent::ShowCategories(categories) => render_categories(categories),
        UiEvent::ShowWordList {
            category,
            difficulty,
            words,
        } => render_word_list(category, *difficulty, words),
        UiEvent::ShowError(message) => format!("! {message}"),
        UiEvent::Status(message) => message.clone(),
        UiEvent::Help => render_help(),
        UiEvent::Close => String::new(),
    }
}

pub fn render_definition(definition: &Definition, config: &UiConfig) -> String {
    let mut out = definition.word.clone();
    if let Some(pronunciation) = definition.pronunciation() {
        let _ = write!(out, "  {pronunciation}");
    }

    for meaning in &definition.meanings {
        let _ = write!(out, "\n\n  {}", meaning.part_of_speech);
        for (i, sense) in meaning
            .definitions
            .iter()
            .take(config.max_definitions as usize)
            .enumerate()
        {
            let _ = write!(out, "\n  {}. {}", i + 1, sense.definition);
            if let Some(example) = sense.example.as_ref().filter(|_| config.show_examples) {
                let _ = write!(out, "\n     \"{example}\"");
            }
        }
        if !meaning.synonyms.is_empty() {
            let _ = write!(out, "\n  Synonyms: {}", meaning.synonyms.join(", "));
        }
        if !meaning.antonyms.is_empty() {
            let _ = write!(out, "\n  Antonyms: {}", meaning.antonyms.join(", "));
        }
    }

    if let Some(origin) = &definition.origin {
        let _ = write!(out, "\n\n  Origin: {origin}");
    }
    out
}

fn summary_line(definition: &Definition) -> String {
    match definition.summary() {
        Some(sense) => format!("{}: {}", definition.word, sense.definition),
        None => definition.word.clone(),
    }
}

pub fn render_favorites(favorites: &[Definition]) -> String {
    if favorites.is_empty() {
        return "No favorites yet".to_string();
    }
    let mut out = format!("Favorites ({})", favorites.len());
    for definition in favorites {
        let _ = write!(out, "\n  * {}", summary_line(definition));
    }
    out
}

pub fn render_history(history: &[HistoryEntry]) -> String {
    if history.is_empty() {
        return "No search history".to_string();
    }
    let mut out = format!("History ({})", history.len());
    for (i, entry) in history.iter().enumerate() {
        let _ = write!(
            out,
            "\n  {:>2}. {}  [{}]",
            i + 1,
            entry.word.word,
            local_time(&entry.timestamp)
        );
    }
    out
}

/// RFC 3339 stamp in local time, or the raw stamp when it does not parse
pub fn local_time(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(time) => time
            .with_timezone(&Local)
            .format("%b %-d, %Y %H:%M")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

pub fn render_settings(settings: &Settings) -> String {
    let theme = settings.theme();
    format!(
        "Dark mode: {}\nFont size: {} (headings {:.0}/{:.0}, captions {:.1})\nColors: text {} on {}, accent {}",
        if settings.dark_mode { "on" } else { "off" },
        settings.font_size,
        theme.typography.h1,
        theme.typography.h2,
        theme.typography.caption,
        theme.colors.text,
        theme.colors.background,
        theme.colors.primary,
    )
}

pub fn render_categories(categories: &[String]) -> String {
    let levels: Vec<&str> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();
    format!(
        "Categories: {}\nLevels: {}\nUse `words <category> [level]`",
        categories.join(", "),
        levels.join(", ")
    )
}

pub fn render_word_list(category: &str, difficulty: Difficulty, words: &[String]) -> String {
    if words.is_empty() {
        return format!("No words in {category} ({difficulty}) yet");
    }
    let mut out = format!("Words in {category} ({difficulty})");
    for (i, word) in words.iter().enumerate() {
        let _ = write!(out, "\n  {:>2}. {}", i + 1, word);
    }
    out.push_str("\nUse `pick <n>` to look one up");
    out
}

pub fn render_help() -> String {
    [
        "Commands:",
        "  <word> | search <word>   look a word up",
        "  fav [word]               add to favorites (default: word on screen)",
        "  unfav <word>             remove from favorites",
        "  favorites                list favorites",
        "  history                  list recent searches",
        "  show <n> / open <word>   show a saved definition without fetching",
        "  forget <n|timestamp>     remove a history entry",
        "  clear                    clear history",
        "  say [word] / stop        pronounce / stop",
        "  dark                     toggle dark mode",
        "  font <size>              set font size (14, 16, 18, 20, 22)",
        "  settings                 show settings",
        "  wotd / related <n>       new word of the day / search a related word",
        "  words [category [level]] browse word lists, then `pick <n>`",
        "  help / quit",
    ]
    .join("\n")
}
