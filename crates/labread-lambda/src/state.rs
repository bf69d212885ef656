use std::sync::Arc;
use std::time::Duration;

use labread_bedrock::narrative::NarrativeSource;
use labread_interpret::Interpreter;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub interpreter: Interpreter,
    /// `None` when no narrative model is configured.
    pub narrator: Option<Arc<dyn NarrativeSource>>,
    pub narrative_timeout: Duration,
    pub max_input_bytes: usize,
}
