use std::sync::Arc;

use gazette_store::{ArticleStore, InMemoryArticleStore};

/// Service wiring shared by all handlers.
///
/// Holds the record store behind its trait so persistence can be swapped
/// (or mocked) without touching the handler layer.
pub struct AppServices {
    store: Arc<dyn ArticleStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn ArticleStore {
        self.store.as_ref()
    }
}

/// In-memory infra wiring (dev/test).
pub fn build_services() -> AppServices {
    AppServices::new(Arc::new(InMemoryArticleStore::new()))
}
