//! Wire projection of article records.
//!
//! Pure functions: the reference instant is passed in by the caller, so the
//! same record and instant always produce the same view.

use chrono::{DateTime, Utc};
use serde::Serialize;

use gazette_core::ArticleId;

use crate::article::Article;

/// Wire representation of an article. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleView {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
    /// Relative time since the record was created, e.g. "2 days before".
    pub published: String,
    /// Relative time since the record was last touched.
    pub updated: String,
}

/// Project one record into its wire view, relative to `now`.
pub fn transform_one(article: &Article, now: DateTime<Utc>) -> ArticleView {
    ArticleView {
        id: article.id,
        title: article.title.clone(),
        body: article.body.clone(),
        published: since(article.created_at, now),
        updated: since(article.updated_at, now),
    }
}

/// Project a collection elementwise, preserving input order.
pub fn transform_many(articles: &[Article], now: DateTime<Utc>) -> Vec<ArticleView> {
    articles.iter().map(|a| transform_one(a, now)).collect()
}

/// Human-relative rendering of "how long ago": "just now" under a minute,
/// otherwise the largest whole unit of minutes/hours/days. Instants in the
/// future clamp to "just now".
fn since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(then).num_seconds().max(0);

    if secs < 60 {
        return "just now".to_string();
    }

    let minutes = secs / 60;
    if minutes < 60 {
        return unit_before(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return unit_before(hours, "hour");
    }

    unit_before(hours / 24, "day")
}

fn unit_before(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} before")
    } else {
        format!("{n} {unit}s before")
    }
}
