use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use gazette_articles::{creation_rules, transform_many, transform_one};
use gazette_core::{ArticleId, validate};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_article).get(list_articles))
        .route("/:id", get(get_article).delete(delete_article))
}

/// GET /article: all records in store order, transformed.
///
/// An empty store is a normal response (`{"data": []}`), never an error.
pub async fn list_articles(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let articles = match services.store().find_all() {
        Ok(articles) => articles,
        Err(e) => return errors::store_error_to_response(e),
    };

    let views = transform_many(&articles, Utc::now());
    (StatusCode::OK, Json(dto::data_envelope(views))).into_response()
}

/// GET /article/:id: one record, transformed.
pub async fn get_article(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ArticleId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.store().find_by_id(id) {
        Ok(Some(article)) => {
            let view = transform_one(&article, Utc::now());
            (StatusCode::OK, Json(dto::data_envelope(view))).into_response()
        }
        Ok(None) => errors::record_not_found(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// POST /article: validate the submitted fields, then create.
///
/// On success the raw created record is returned (timestamps included, no
/// view transformation and no `data` envelope), unlike list/get. Existing
/// clients read the raw timestamps from this response.
pub async fn create_article(
    Extension(services): Extension<Arc<AppServices>>,
    Json(fields): Json<dto::FieldMap>,
) -> axum::response::Response {
    let report = validate(&fields, &creation_rules());
    if report.fails() {
        tracing::info!(fields = report.errors().len(), "article create rejected by validation");
        return errors::validation_failed(&report);
    }

    match services.store().create(dto::draft_from_fields(&fields)) {
        Ok(article) => (StatusCode::OK, Json(article)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// DELETE /article/:id: 204 when a record was removed, 404 otherwise.
pub async fn delete_article(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ArticleId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.store().delete(id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => errors::record_not_found(),
        Err(e) => errors::store_error_to_response(e),
    }
}
