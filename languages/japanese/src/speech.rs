use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use kana_config::speech::SpeechConfig;
use kana_speech::{ProviderMetadata, SpeechError, SpeechLookup};
use kana_types::AudioClip;
use serde_json::json;

const DEFAULT_MIME_TYPE: &str = "audio/mpeg";

/// Hosted TTS model reading kana and vocabulary aloud
#[derive(Clone)]
pub struct GeminiSpeech {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    voice: String,
    prompt: String,
}

impl GeminiSpeech {
    pub fn new(config: &SpeechConfig) -> Result<Self, SpeechError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key: config.resolved_api_key(),
            endpoint: config.endpoint(),
            voice: config.voice.clone(),
            prompt: config.prompt.clone(),
        })
    }

    fn request_body(&self, text: &str) -> serde_json::Value {
        json!({
            "contents": [{
                "parts": [{ "text": self.prompt.replace("{text}", text) }]
            }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": {
                        "prebuiltVoiceConfig": { "voiceName": self.voice }
                    }
                }
            }
        })
    }
}

#[async_trait]
impl SpeechLookup for GeminiSpeech {
    async fn lookup(&self, text: &str) -> Result<AudioClip, SpeechError> {
        if self.api_key.is_empty() {
            return Err(SpeechError::AuthenticationError);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(text))
            .send()
            .await?;

        if response.status() == 429 {
            return Err(SpeechError::RateLimitExceeded);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(SpeechError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(SpeechError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            SpeechError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let clip = clip_from_response(&json)?;
        tracing::debug!("Synthesized '{}' into {} bytes of {}", text, clip.len(), clip.mime_type);
        Ok(clip)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini TTS".to_string(),
            voice: self.voice.clone(),
            requires_api_key: true,
        }
    }
}

/// Pulls the first inline audio part out of a `generateContent` response
pub fn clip_from_response(json: &serde_json::Value) -> Result<AudioClip, SpeechError> {
    let inline = json["candidates"]
        .get(0)
        .and_then(|c| c["content"]["parts"].get(0))
        .map(|p| &p["inlineData"])
        .ok_or(SpeechError::NoAudio)?;

    let data = inline["data"]
        .as_str()
        .filter(|d| !d.is_empty())
        .ok_or(SpeechError::NoAudio)?;

    let mime_type = inline["mimeType"].as_str().unwrap_or(DEFAULT_MIME_TYPE);
    let bytes = STANDARD.decode(data)?;

    Ok(AudioClip::new(mime_type, bytes))
}
