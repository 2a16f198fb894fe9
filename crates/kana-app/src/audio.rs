use std::path::PathBuf;

use async_trait::async_trait;
use kana_types::AudioClip;

/// Where `Play` effects end up
#[async_trait]
pub trait AudioOutput: Send + Sync {
    /// Starts `clip`, replacing whatever was playing
    async fn play(&self, clip: AudioClip) -> std::io::Result<()>;
}

/// Writes the current clip to a file for an external player to pick up
pub struct FileAudioOutput {
    path: PathBuf,
}

impl FileAudioOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AudioOutput for FileAudioOutput {
    async fn play(&self, clip: AudioClip) -> std::io::Result<()> {
        tokio::fs::write(&self.path, &clip.data).await?;
        tracing::info!(
            "Now playing {} ({} bytes) at {}",
            clip.mime_type,
            clip.len(),
            self.path.display()
        );
        Ok(())
    }
}
