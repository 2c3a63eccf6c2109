use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_rate() -> f32 {
    0.5
}

fn default_pitch() -> f32 {
    1.0
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// TTS program to run, platform default when unset
    pub command: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    /// 0.0 - 1.0, 0.5 is the engine's normal speed
    #[serde(default = "default_rate")]
    pub rate: f32,
    #[serde(default = "default_pitch")]
    pub pitch: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            command: None,
            language: default_language(),
            rate: default_rate(),
            pitch: default_pitch(),
        }
    }
}
