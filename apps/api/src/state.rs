use std::sync::Arc;

use crate::config::Config;
use crate::generation::generator::QuestionGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<QuestionGenerator>,
    pub config: Config,
}
