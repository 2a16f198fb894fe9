use std::sync::Arc;

use kana_core::{AppEvent, Effect, ViewState};
use kana_speech::SpeechLookup;
use kanal::{AsyncReceiver, AsyncSender};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio_util::sync::CancellationToken;

use crate::audio::AudioOutput;
use crate::state::AppState;

pub mod auto_advance;
pub mod playback;
pub mod speech_lookup;

use auto_advance::schedule_advance;
use playback::handle_playback;
use speech_lookup::spawn_lookup;

/// Collaborators the effects are carried out with
#[derive(Clone)]
pub struct Services {
    pub speech: Arc<dyn SpeechLookup>,
    pub audio: Arc<dyn AudioOutput>,
}

/// Channel ends the event loop works with
#[derive(Clone)]
pub struct Links {
    pub ui_to_app_rx: AsyncReceiver<AppEvent>,
    /// Lets spawned work post back into the loop's own inbox
    pub ui_to_app_tx: AsyncSender<AppEvent>,
    pub app_to_ui_tx: AsyncSender<AppEvent>,
}

/// App's main loop, the single owner of the view state
pub async fn event_loop(
    state: Arc<AppState>,
    services: Services,
    links: Links,
    cancel_token: CancellationToken,
) -> anyhow::Result<()> {
    let (mut view, mut rng) = {
        let config = state.config.read().await;
        let rng = match config.quiz.seed {
            Some(seed) => {
                tracing::info!("Quiz RNG seeded with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        (ViewState::from_config(&config), rng)
    };

    links
        .app_to_ui_tx
        .send(AppEvent::Render(Box::new(view.clone())))
        .await?;
    links.app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel_token.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = links.ui_to_app_rx.recv() => event?,
        };

        match event {
            AppEvent::Action(action) => {
                tracing::debug!("[EVENT_LOOP] {:?}", action);
                let effects = view.apply(action, &state.catalog, &mut rng);
                for effect in effects {
                    handle_effect(effect, &services, &links, &cancel_token).await?;
                }
                links
                    .app_to_ui_tx
                    .send(AppEvent::Render(Box::new(view.clone())))
                    .await?;
            }
            AppEvent::Quit => {
                tracing::info!("[EVENT_LOOP] Quit requested");
                // the UI may have stopped listening already
                let _ = links.app_to_ui_tx.send(AppEvent::Quit).await;
                break;
            }
            AppEvent::Render(_) | AppEvent::Status(_) | AppEvent::BackendReady => {
                // UI-only events, ignore in backend
            }
        }
    }

    Ok(())
}

async fn handle_effect(
    effect: Effect,
    services: &Services,
    links: &Links,
    cancel_token: &CancellationToken,
) -> anyhow::Result<()> {
    match effect {
        Effect::LookupSpeech(text) => {
            spawn_lookup(services.speech.clone(), text, links.ui_to_app_tx.clone());
        }
        Effect::ScheduleAdvance { generation, delay } => {
            schedule_advance(
                generation,
                delay,
                links.ui_to_app_tx.clone(),
                cancel_token.child_token(),
            );
        }
        Effect::Play(clip) => {
            handle_playback(services.audio.as_ref(), clip).await;
        }
        Effect::QuizUnavailable(e) => {
            tracing::error!("Quiz generator failed: {e}");
            links
                .app_to_ui_tx
                .send(AppEvent::Status(format!("No question available: {e}")))
                .await?;
        }
    }

    Ok(())
}
