use std::sync::Arc;

use thiserror::Error;

use gazette_articles::{Article, ArticleDraft};
use gazette_core::ArticleId;

/// Record store operation error.
///
/// These are **infrastructure errors** (storage availability, backend
/// faults), as opposed to domain errors (validation, missing records).
/// "Record not found" is not an error at this layer: lookups return
/// `Option` and deletes report whether a row was removed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected or failed the operation.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Persistence boundary for article records.
///
/// ## Contract
///
/// - `create` assigns the record id and both timestamps. Ids are unique and
///   strictly increasing per store instance, never reused.
/// - `find_all` returns records in store order (ascending id, which is
///   creation order). An empty store returns an empty vector, not an error.
/// - `find_by_id` returns `None` for absent ids.
/// - `delete` returns whether a record was removed.
///
/// Implementations own their concurrency guarantees; callers hold no state
/// between requests.
pub trait ArticleStore: Send + Sync {
    /// All records, in store order.
    fn find_all(&self) -> Result<Vec<Article>, StoreError>;

    /// Look up a single record by id.
    fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, StoreError>;

    /// Persist a new record, assigning id and timestamps.
    fn create(&self, draft: ArticleDraft) -> Result<Article, StoreError>;

    /// Remove a record by id. Returns `true` if a record was removed.
    fn delete(&self, id: ArticleId) -> Result<bool, StoreError>;
}

impl<S> ArticleStore for Arc<S>
where
    S: ArticleStore + ?Sized,
{
    fn find_all(&self) -> Result<Vec<Article>, StoreError> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, StoreError> {
        (**self).find_by_id(id)
    }

    fn create(&self, draft: ArticleDraft) -> Result<Article, StoreError> {
        (**self).create(draft)
    }

    fn delete(&self, id: ArticleId) -> Result<bool, StoreError> {
        (**self).delete(id)
    }
}
