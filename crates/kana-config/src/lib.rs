use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use self::audio::AudioConfig;
use self::quiz::QuizConfig;
use self::speech::SpeechConfig;
use self::ui::UiConfig;

pub mod audio;
pub mod quiz;
pub mod speech;
pub mod ui;

fn default_event_channel_capacity() -> usize {
    64
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub quiz: QuizConfig,
    pub speech: SpeechConfig,
    pub ui: UiConfig,
    pub audio: AudioConfig,

    /// Capacity of the learner action channel
    #[serde(default = "default_event_channel_capacity")]
    pub event_channel_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let auto_advance_ms = env::var("KANA_AUTO_ADVANCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(QuizConfig::default().auto_advance_ms);

        let seed = env::var("KANA_QUIZ_SEED")
            .ok()
            .and_then(|v| v.parse().ok());

        Config {
            quiz: QuizConfig {
                auto_advance_ms,
                seed,
            },
            speech: SpeechConfig::new(),
            ui: UiConfig::default(),
            audio: AudioConfig::new(),

            event_channel_capacity: default_event_channel_capacity(),
        }
    }

    pub fn auto_advance_delay(&self) -> Duration {
        Duration::from_millis(self.quiz.auto_advance_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiz: QuizConfig::default(),
            speech: SpeechConfig::default(),
            ui: UiConfig::default(),
            audio: AudioConfig::default(),
            event_channel_capacity: default_event_channel_capacity(),
        }
    }
}
