use std::sync::Arc;

use crate::config::Config;
use crate::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionStore>,
    #[allow(dead_code)]
    pub config: Config,
}
