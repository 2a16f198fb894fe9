use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use kana_config::Config;
use kana_config::speech::SpeechConfig;
use kana_lang_japanese::GeminiSpeech;
use kana_speech::{SilentSpeech, SpeechLookup};
use tokio::signal;

pub mod audio;
pub mod cli;
pub mod controller;
pub mod events;
pub mod logging;
pub mod profile;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests {
    mod console_tests;
    mod effect_tests;
    mod event_loop_tests;
    mod support;
}

use self::audio::FileAudioOutput;
use self::cli::Args;
use self::controller::AppController;
use self::events::Services;
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Err(e) = dotenvy::dotenv() {
        // no .env is the common case
        if !e.not_found() {
            eprintln!("failed to read .env: {e}");
        }
    }
    logging::init_logging(args.log_json);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(args));

    // a blocked stdin read would otherwise keep the runtime alive
    runtime.shutdown_timeout(Duration::from_millis(250));
    result
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = profile::load_config(args.config.as_deref())?;
    let catalog = kana_lang_japanese::catalog()?;
    tracing::info!(
        "Curriculum loaded: {} modules, {} entries",
        catalog.categories().len(),
        catalog.pool().count()
    );

    let services = build_services(&config);
    let capacity = config.event_channel_capacity;
    let state = Arc::new(AppState::new(config, catalog));

    let controller = AppController::new(state, capacity);
    let mut tasks = controller.spawn_tasks(services);

    tokio::select! {
        result = signal::ctrl_c() => {
            result?;
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Session ended"),
                Ok(Err(e)) => tracing::error!("task exited: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.abort_all();
    Ok(())
}

fn build_services(config: &Config) -> Services {
    let speech = build_speech(&config.speech);
    let metadata = speech.metadata();
    tracing::info!("Speech provider: {} {}", metadata.name, metadata.voice);

    Services {
        speech,
        audio: Arc::new(FileAudioOutput::new(&config.audio.output_path)),
    }
}

fn build_speech(config: &SpeechConfig) -> Arc<dyn SpeechLookup> {
    if !config.enabled {
        tracing::info!("Speech disabled");
        return Arc::new(SilentSpeech);
    }
    if config.resolved_api_key().is_empty() {
        tracing::warn!("No GEMINI_API_KEY set, speech disabled");
        return Arc::new(SilentSpeech);
    }

    match GeminiSpeech::new(config) {
        Ok(speech) => Arc::new(speech),
        Err(e) => {
            tracing::warn!("Failed to build speech client: {e}");
            Arc::new(SilentSpeech)
        }
    }
}
