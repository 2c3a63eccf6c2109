use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use wordbook_api::{DefinitionFetcher, DictionaryApiClient};
use wordbook_core::speech::SpeechEngine;
use wordbook_core::storage::{FileStore, KeyValueStore};
use wordbook_io::speech::{CommandSpeaker, DisabledSpeaker};
use wordbook_io::stdin::spawn_stdin_reader;

pub mod context;
pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;
pub mod status;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::{AppController, ChannelSet};
use self::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "wordbook", version, about = "English dictionary in the terminal")]
struct Args {
    /// Config profile to load
    #[arg(long, default_value = "main")]
    profile: String,

    /// Where favorites, history and settings are stored
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Create a profile cloned from main and exit
    #[arg(long, value_name = "NAME")]
    create_profile: Option<String>,

    /// Log as JSON
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    if let Err(e) = profile::init_user_config() {
        tracing::warn!("Could not initialize user config: {e}");
    }
    if let Some(name) = &args.create_profile {
        let path = profile::add_profile_from_default(name)?;
        println!("Created profile {}", path.display());
        return Ok(());
    }

    let config = profile::load_user_profile(&args.profile)?;
    let data_dir = profile::resolve_data_dir(&config, args.data_dir.as_deref());
    tracing::info!("Using data directory {}", data_dir.display());

    let store: Arc<dyn KeyValueStore> = Arc::new(
        FileStore::open(&data_dir)
            .await
            .with_context(|| format!("opening data directory {}", data_dir.display()))?,
    );
    let fetcher: Arc<dyn DefinitionFetcher> = Arc::new(DictionaryApiClient::new(&config.network)?);

    let channels = ChannelSet::new(&config);
    let engine: Arc<dyn SpeechEngine> = if config.speech.enabled {
        Arc::new(CommandSpeaker::new(
            config.speech.clone(),
            channels.speech.0.clone(),
        ))
    } else {
        Arc::new(DisabledSpeaker)
    };

    let lines = spawn_stdin_reader(config.input_capacity.max(1))?;
    let state = Arc::new(AppState::load(config, fetcher, store, engine).await);
    let controller = AppController::new(channels, state.clone());

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    run(&controller, lines, shutdown).await;

    controller.shutdown();
    if let Err(e) = state.playback.lock().await.stop().await {
        tracing::warn!("Failed to stop speech on exit: {e}");
    }
    state.flush().await;
    tracing::info!("Bye");

    Ok(())
}

/// How long queued commands get to finish once shutdown starts
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Run until shutdown is requested or any task ends, then stop the rest
pub async fn run(
    controller: &AppController,
    lines: kanal::AsyncReceiver<String>,
    shutdown: impl Future<Output = ()>,
) {
    let mut tasks = controller.spawn_tasks(lines).await;
    let cancel = controller.cancel_token();

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        _ = cancel.cancelled() => {
            tracing::info!("Quit requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    let drain = async {
        while let Some(result) = tasks.join_next().await {
            if let Ok(Err(e)) = result {
                tracing::error!("task failed during shutdown: {e}");
            } else if let Err(e) = result {
                tracing::error!("task panicked during shutdown: {e}");
            }
        }
    };
    if tokio::time::timeout(SHUTDOWN_GRACE, drain).await.is_err() {
        tracing::warn!("Tasks still running after {SHUTDOWN_GRACE:?}, aborting");
        tasks.shutdown().await;
    }
}
