use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use kana_speech::{ProviderMetadata, SpeechError, SpeechLookup};
use kana_types::AudioClip;

use crate::audio::AudioOutput;

/// Answers from a fixed table; anything else fails like a network error would
#[derive(Default)]
pub struct FakeSpeech {
    clips: HashMap<String, AudioClip>,
    calls: AtomicUsize,
}

impl FakeSpeech {
    pub fn with_clip(mut self, text: &str, data: &[u8]) -> Self {
        self.clips
            .insert(text.to_string(), AudioClip::new("audio/wav", data.to_vec()));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechLookup for FakeSpeech {
    async fn lookup(&self, text: &str) -> Result<AudioClip, SpeechError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.clips
            .get(text)
            .cloned()
            .ok_or_else(|| SpeechError::ApiError(format!("no clip for {text}")))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".to_string(),
            voice: "test".to_string(),
            requires_api_key: false,
        }
    }
}

#[derive(Default)]
pub struct MemoryAudio {
    played: Mutex<Vec<AudioClip>>,
}

impl MemoryAudio {
    pub fn played(&self) -> Vec<AudioClip> {
        self.played.lock().unwrap().clone()
    }
}

#[async_trait]
impl AudioOutput for MemoryAudio {
    async fn play(&self, clip: AudioClip) -> std::io::Result<()> {
        self.played.lock().unwrap().push(clip);
        Ok(())
    }
}
