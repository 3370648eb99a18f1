use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;

use gazette_articles::{Article, ArticleDraft};
use gazette_core::ArticleId;

use crate::store::{ArticleStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    rows: BTreeMap<ArticleId, Article>,
}

/// In-memory article store.
///
/// Intended for tests/dev. Not optimized for performance. Rows are keyed by
/// id, so store order is ascending id (creation order).
#[derive(Debug, Default)]
pub struct InMemoryArticleStore {
    inner: RwLock<Inner>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArticleStore for InMemoryArticleStore {
    fn find_all(&self) -> Result<Vec<Article>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        Ok(inner.rows.values().cloned().collect())
    }

    fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        Ok(inner.rows.get(&id).cloned())
    }

    fn create(&self, draft: ArticleDraft) -> Result<Article, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        inner.next_id += 1;
        let id = ArticleId::from_raw(inner.next_id);

        // Both timestamps stamped from the same instant, keeping
        // updated_at >= created_at from the first moment.
        let now = Utc::now();
        let article = Article {
            id,
            title: draft.title,
            body: draft.body,
            created_at: now,
            updated_at: now,
        };

        inner.rows.insert(id, article.clone());
        tracing::info!(article_id = %id, "article created");

        Ok(article)
    }

    fn delete(&self, id: ArticleId) -> Result<bool, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        let removed = inner.rows.remove(&id).is_some();
        if removed {
            tracing::info!(article_id = %id, "article deleted");
        }

        Ok(removed)
    }
}
