use std::sync::Arc;

use crate::config::Config;
use crate::content::provider::ContentProvider;

/// Shared application state injected into all route handlers via Axum
/// extractors. The provider is the strategy chosen once at startup from
/// credential presence; it is read-only for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ContentProvider>,
    pub config: Config,
}
