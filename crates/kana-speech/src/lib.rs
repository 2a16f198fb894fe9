use kana_types::AudioClip;

/// Text-to-speech provider interface
#[async_trait::async_trait]
pub trait SpeechLookup: Send + Sync {
    /// Synthesize `text` into a playable clip
    async fn lookup(&self, text: &str) -> Result<AudioClip, SpeechError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub voice: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Response carried no audio")]
    NoAudio,

    #[error("Audio payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Speech lookup disabled")]
    Disabled,
}

/// Provider used when speech is switched off; every lookup fails
pub struct SilentSpeech;

#[async_trait::async_trait]
impl SpeechLookup for SilentSpeech {
    async fn lookup(&self, _text: &str) -> Result<AudioClip, SpeechError> {
        Err(SpeechError::Disabled)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "silent".to_string(),
            voice: String::new(),
            requires_api_key: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn silent_speech_always_fails() {
        let err = SilentSpeech.lookup("あ").await.unwrap_err();
        assert!(matches!(err, SpeechError::Disabled));
        assert!(!SilentSpeech.metadata().requires_api_key);
    }
}
