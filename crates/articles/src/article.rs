use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gazette_core::{ArticleId, Entity, Rule, RuleSet};

/// Article record as held by the record store.
///
/// `id` is assigned by the store on creation and never changes. `created_at`
/// is stamped once; `updated_at` is stamped at creation and on each mutation,
/// so `updated_at >= created_at` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Article {
    type Id = ArticleId;

    fn id(&self) -> ArticleId {
        self.id
    }
}

/// Validated input for creating an article. Id and timestamps are the
/// store's to assign.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub body: String,
}

/// Rule set for the article creation form: both fields required, non-empty.
pub fn creation_rules() -> RuleSet {
    RuleSet::new()
        .field("title", [Rule::Required, Rule::MinLength(1)])
        .field("body", [Rule::Required, Rule::MinLength(1)])
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use gazette_core::validate;

    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn creation_rules_accept_complete_input() {
        let report = validate(&fields(&[("title", "T"), ("body", "B")]), &creation_rules());
        assert!(!report.fails());
    }

    #[test]
    fn creation_rules_reject_empty_title() {
        let report = validate(&fields(&[("title", ""), ("body", "x")]), &creation_rules());
        assert!(report.fails());
        assert!(!report.messages_for("title").is_empty());
        assert!(report.messages_for("body").is_empty());
    }

    #[test]
    fn creation_rules_reject_missing_body() {
        let report = validate(&fields(&[("title", "T")]), &creation_rules());
        assert!(report.fails());
        assert!(!report.messages_for("body").is_empty());
    }

    #[test]
    fn article_serializes_timestamps_as_rfc3339() {
        let created: DateTime<Utc> = "2023-04-01T10:00:00Z".parse().unwrap();
        let article = Article {
            id: ArticleId::from_raw(1),
            title: "Title 1".to_string(),
            body: "My first article".to_string(),
            created_at: created,
            updated_at: created,
        };

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["created_at"], "2023-04-01T10:00:00Z");
    }
}
