// Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::render::HtmlRenderer;

/// State shared by every request handler.
///
/// Everything here is immutable after startup: the configuration, and the
/// rendering engine behind its trait so the concrete engine is swappable
/// without touching handler logic.
pub struct AppState {
    pub config: Config,
    pub renderer: Arc<dyn HtmlRenderer>,
}

impl AppState {
    pub fn new(config: Config, renderer: Arc<dyn HtmlRenderer>) -> Self {
        Self { config, renderer }
    }
}
