use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

fn default_voice() -> String {
    "Kore".to_string()
}

fn default_prompt() -> String {
    "Read this Japanese word clearly: {text}".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Falls back to `GEMINI_API_KEY` when empty
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Prebuilt voice name
    #[serde(default = "default_voice")]
    pub voice: String,
    /// `{text}` is replaced with the requested string
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl SpeechConfig {
    pub fn new() -> Self {
        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let model = env::var("KANA_TTS_MODEL").unwrap_or_else(|_| default_model());

        Self {
            api_key,
            model,
            ..Self::default()
        }
    }

    /// Key from the profile, or from the environment if the profile has none
    pub fn resolved_api_key(&self) -> String {
        if self.api_key.is_empty() {
            env::var("GEMINI_API_KEY").unwrap_or_default()
        } else {
            self.api_key.clone()
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }

    pub fn prompt_for(&self, text: &str) -> String {
        self.prompt.replace("{text}", text)
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: String::new(),
            api_url: default_api_url(),
            model: default_model(),
            voice: default_voice(),
            prompt: default_prompt(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
