use std::io::Write;

use kana_core::AppEvent;

use crate::render::render;
use crate::state::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Applies one backend event to the UI copy and prints what changed
pub fn handle_event(
    event: AppEvent,
    state: &mut UiState,
    out: &mut impl Write,
) -> std::io::Result<Flow> {
    match event {
        AppEvent::Render(view) => {
            state.view = *view;
            write!(out, "{}", render(&state.view, &state.catalog))?;
        }
        AppEvent::Status(message) => {
            writeln!(out, "» {message}")?;
        }
        AppEvent::BackendReady => {
            tracing::debug!("[UI] Backend ready");
            state.ready = true;
            writeln!(out, "» ready, type help for commands")?;
        }
        AppEvent::Quit => {
            tracing::debug!("[UI] Quit received");
            return Ok(Flow::Stop);
        }
        AppEvent::Action(action) => {
            // actions only travel towards the backend
            tracing::debug!("[UI] Ignoring stray action {:?}", action);
        }
    }

    out.flush()?;
    Ok(Flow::Continue)
}
