//! Shared application state.

use std::sync::Arc;

use crate::application::services::ShortUrlService;
use crate::domain::repositories::ShortUrlRepository;

/// State injected into every handler.
///
/// Holds the one storage handle shared by all requests; there is no global.
#[derive(Clone)]
pub struct AppState {
    pub short_url_service: Arc<ShortUrlService>,
}

impl AppState {
    /// Builds the state around an initialized repository.
    pub fn new(repository: Arc<dyn ShortUrlRepository>) -> Self {
        Self {
            short_url_service: Arc::new(ShortUrlService::new(repository)),
        }
    }
}
