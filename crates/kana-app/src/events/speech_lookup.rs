use std::sync::Arc;

use kana_core::{Action, AppEvent};
use kana_speech::SpeechLookup;
use kanal::AsyncSender;
use tokio::task::JoinHandle;

/// Runs one lookup off the loop and posts `SpeechCompleted` back, in
/// completion order. Failures are logged and reported as a missing clip.
pub fn spawn_lookup(
    speech: Arc<dyn SpeechLookup>,
    text: String,
    inbox: AsyncSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let clip = match speech.lookup(&text).await {
            Ok(clip) => Some(clip),
            Err(e) => {
                tracing::warn!("Speech lookup for '{}' failed: {}", text, e);
                None
            }
        };

        if inbox
            .send(AppEvent::Action(Action::SpeechCompleted { text, clip }))
            .await
            .is_err()
        {
            tracing::debug!("Event loop gone before speech lookup finished");
        }
    })
}
