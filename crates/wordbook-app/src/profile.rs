use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use wordbook_config::Config;

const APP_DIR: &str = "wordbook";

/// Platform config folder, `./.wordbook` when the platform has none
fn wordbook_root() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join(APP_DIR),
        None => PathBuf::from(".").join(format!(".{APP_DIR}")),
    }
}

fn profiles_dir() -> PathBuf {
    wordbook_root().join("profiles")
}

/// Where favorites, history and settings live unless the config says otherwise
pub fn default_data_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR),
        None => PathBuf::from(".").join(format!(".{APP_DIR}")).join("data"),
    }
}

/// Storage directory for `config`, with `override_dir` (from the command line) winning
pub fn resolve_data_dir(config: &Config, override_dir: Option<&Path>) -> PathBuf {
    override_dir
        .map(Path::to_path_buf)
        .or_else(|| config.storage.data_dir.clone())
        .unwrap_or_else(default_data_dir)
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("parsing profile {}", path.display()))?;
    Ok(profile.value)
}

/// Initialize user config folders and main profile if missing
pub fn init_user_config() -> anyhow::Result<()> {
    fs::create_dir_all(profiles_dir())?;

    let main_profile = profiles_dir().join("main.json");

    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            value: Config::new(),
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

/// Load a user profile by name, defaulting to main if name not found
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    let profile_file = profiles_dir().join(format!("{name}.json"));

    if profile_file.exists() {
        read_profile(&profile_file)
    } else {
        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
        let main_file = profiles_dir().join("main.json");
        if main_file.exists() {
            read_profile(&main_file)
        } else {
            Ok(Config::new())
        }
    }
}

/// Add a new profile cloned from main (or defaults if main missing)
pub fn add_profile_from_default(new_name: &str) -> anyhow::Result<PathBuf> {
    let default_config = load_user_profile("main")?;
    let profile = Profile {
        name: new_name.into(),
        value: default_config,
    };
    fs::create_dir_all(profiles_dir())?;
    let file = profiles_dir().join(format!("{new_name}.json"));
    fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created new profile: {new_name}");
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_data_dir_wins() {
        let mut config = Config::new();
        config.storage.data_dir = Some(PathBuf::from("/from/config"));

        assert_eq!(
            resolve_data_dir(&config, Some(Path::new("/from/cli"))),
            PathBuf::from("/from/cli")
        );
        assert_eq!(
            resolve_data_dir(&config, None),
            PathBuf::from("/from/config")
        );

        config.storage.data_dir = None;
        assert_eq!(resolve_data_dir(&config, None), default_data_dir());
    }

    #[test]
    fn profile_file_round_trips_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.json");
        let mut config = Config::new();
        config.word_of_day.max_attempts = 2;
        let profile = Profile {
            name: "test".into(),
            value: config,
        };
        fs::write(&path, serde_json::to_string_pretty(&profile).unwrap()).unwrap();

        let loaded = read_profile(&path).unwrap();
        assert_eq!(loaded.word_of_day.max_attempts, 2);
    }
}
