use kana_core::{Catalog, ViewState};

/// UI-side copy of what the backend last rendered
pub struct UiState {
    pub catalog: Catalog,
    pub view: ViewState,
    pub ready: bool,
}

impl UiState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            view: ViewState::new(),
            ready: false,
        }
    }
}
