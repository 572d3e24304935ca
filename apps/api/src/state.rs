use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentGenerator;
use crate::templates::TemplateEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub engine: TemplateEngine,
    pub content: Arc<dyn ContentGenerator>,
    pub config: Config,
}
