use std::env;

use serde::{Deserialize, Serialize};

fn default_output_path() -> String {
    "kana-clip.audio".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AudioConfig {
    /// Where the clip that is currently playing gets written
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

impl AudioConfig {
    pub fn new() -> Self {
        let output_path = env::var("KANA_AUDIO_OUT").unwrap_or_else(|_| default_output_path());

        Self { output_path }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
        }
    }
}
