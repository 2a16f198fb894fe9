use kana_types::ScriptMode;
use serde::{Deserialize, Serialize};

fn default_show_romaji() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Script mode a session starts in
    #[serde(default)]
    pub script_mode: ScriptMode,
    #[serde(default = "default_show_romaji")]
    pub show_romaji: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            script_mode: ScriptMode::default(),
            show_romaji: default_show_romaji(),
        }
    }
}
