use std::time::Duration;

use kana_core::{Action, AppEvent};
use kanal::AsyncSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Fires `AutoAdvance { generation }` after `delay` unless cancelled first.
/// Staleness is judged by the view state when the action arrives.
pub fn schedule_advance(
    generation: u64,
    delay: Duration,
    inbox: AsyncSender<AppEvent>,
    cancel_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel_token.cancelled() => {
                tracing::debug!("Auto-advance for question {generation} cancelled");
            }
            _ = tokio::time::sleep(delay) => {
                let _ = inbox
                    .send(AppEvent::Action(Action::AutoAdvance { generation }))
                    .await;
            }
        }
    })
}
