use crate::domain::SuggestionProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub provider: Arc<dyn SuggestionProvider>,
    // Model identifier echoed by the health probe.
    pub model: String,
}
