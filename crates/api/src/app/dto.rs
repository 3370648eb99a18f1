use std::collections::BTreeMap;

use serde::Serialize;

use gazette_articles::ArticleDraft;

/// Submitted form fields, as the validator consumes them.
pub type FieldMap = BTreeMap<String, String>;

/// Wrap a payload in the `data` envelope used by list/get responses.
pub fn data_envelope<T: Serialize>(payload: T) -> serde_json::Value {
    serde_json::json!({ "data": payload })
}

/// Build a draft from validated fields.
///
/// Callers must have run the creation rule set first; missing fields map to
/// empty strings rather than panicking.
pub fn draft_from_fields(fields: &FieldMap) -> ArticleDraft {
    ArticleDraft {
        title: fields.get("title").cloned().unwrap_or_default(),
        body: fields.get("body").cloned().unwrap_or_default(),
    }
}
