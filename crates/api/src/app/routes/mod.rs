use axum::Router;

pub mod articles;
pub mod system;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new().nest("/article", articles::router())
}
