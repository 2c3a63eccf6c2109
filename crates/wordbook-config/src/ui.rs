use serde::{Deserialize, Serialize};

fn default_max_definitions() -> u32 {
    3
}

fn default_show_examples() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Definitions printed per meaning
    #[serde(default = "default_max_definitions")]
    pub max_definitions: u32,
    #[serde(default = "default_show_examples")]
    pub show_examples: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_definitions: default_max_definitions(),
            show_examples: default_show_examples(),
        }
    }
}
