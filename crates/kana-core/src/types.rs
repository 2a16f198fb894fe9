use crate::view::{Action, ViewState};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Anything that feeds the view reducer: learner input, finished
    /// lookups, fired timers
    Action(Action),
    /// Fresh snapshot for the presentation layer
    Render(Box<ViewState>),
    /// One-line notice for the presentation layer
    Status(String),
    BackendReady,
    Quit,
}

impl From<Action> for AppEvent {
    fn from(action: Action) -> Self {
        AppEvent::Action(action)
    }
}
