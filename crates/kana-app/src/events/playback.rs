use kana_types::AudioClip;

use crate::audio::AudioOutput;

pub async fn handle_playback(audio: &dyn AudioOutput, clip: AudioClip) {
    tracing::debug!("Playing clip of {} bytes", clip.len());
    if let Err(e) = audio.play(clip).await {
        tracing::warn!("Audio output failed: {e}");
    }
}
