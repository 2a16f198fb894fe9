use serde::{Deserialize, Serialize};

fn default_auto_advance_ms() -> u64 {
    1500
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct QuizConfig {
    /// Delay before the next question after a correct answer
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
    /// Fixed RNG seed, mostly for reproducing a session
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
            seed: None,
        }
    }
}
