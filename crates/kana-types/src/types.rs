use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which kana script(s) the presentation layer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptMode {
    Hiragana,
    Katakana,
    #[default]
    Both,
}

impl ScriptMode {
    pub fn shows_hiragana(self) -> bool {
        matches!(self, ScriptMode::Hiragana | ScriptMode::Both)
    }

    pub fn shows_katakana(self) -> bool {
        matches!(self, ScriptMode::Katakana | ScriptMode::Both)
    }
}

impl fmt::Display for ScriptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScriptMode::Hiragana => "hiragana",
            ScriptMode::Katakana => "katakana",
            ScriptMode::Both => "both",
        };
        f.write_str(name)
    }
}

impl FromStr for ScriptMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hiragana" | "h" => Ok(ScriptMode::Hiragana),
            "katakana" | "k" => Ok(ScriptMode::Katakana),
            "both" | "b" => Ok(ScriptMode::Both),
            other => Err(format!("unknown script mode: {other}")),
        }
    }
}

/// Playable audio returned by a speech lookup
#[derive(Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl AudioClip {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// Raw audio bytes are noise in logs
impl fmt::Debug for AudioClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioClip")
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.data.len())
            .finish()
    }
}
