//! Declarative field validation.
//!
//! A [`RuleSet`] names the constraints; [`validate`] checks a submitted field
//! map against them and returns a [`ValidationReport`]. The report is a plain
//! request-scoped value: each call stands alone and nothing accumulates
//! across unrelated validations.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Field must be present and non-blank.
    Required,
    /// Field must be at least this many characters (when present).
    MinLength(usize),
}

/// Declared constraints for a set of named fields.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: BTreeMap<String, Vec<Rule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add constraints for one field (builder-style).
    pub fn field(mut self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.entry(name.into()).or_default().extend(rules);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.rules.iter().map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }
}

/// Outcome of one [`validate`] call: per-field error messages, ordered by
/// field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    /// True when at least one rule failed.
    pub fn fails(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    pub fn messages_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    fn push(&mut self, field: &str, message: String) {
        self.errors.entry(field.to_string()).or_default().push(message);
    }
}

/// Check `fields` against `rules`.
///
/// Fields not named by the rule set are ignored. A blank value (empty or
/// whitespace-only) counts as missing for `Required`; `MinLength` only fires
/// on values that are present, so a missing required field reports one error,
/// not two.
pub fn validate(fields: &BTreeMap<String, String>, rules: &RuleSet) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (name, field_rules) in rules.iter() {
        let value = fields.get(name).map(String::as_str).filter(|v| !v.trim().is_empty());

        for rule in field_rules {
            match rule {
                Rule::Required => {
                    if value.is_none() {
                        report.push(name, format!("{name} is required"));
                    }
                }
                Rule::MinLength(min) => {
                    if let Some(v) = value {
                        if v.chars().count() < *min {
                            report.push(name, format!("{name} must be at least {min} characters"));
                        }
                    }
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn article_like_rules() -> RuleSet {
        RuleSet::new()
            .field("title", [Rule::Required, Rule::MinLength(1)])
            .field("body", [Rule::Required, Rule::MinLength(1)])
    }

    #[test]
    fn passes_when_all_fields_present() {
        let report = validate(&fields(&[("title", "T"), ("body", "B")]), &article_like_rules());
        assert!(!report.fails());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn missing_field_reports_single_required_error() {
        let report = validate(&fields(&[("body", "B")]), &article_like_rules());
        assert!(report.fails());
        assert_eq!(report.messages_for("title").len(), 1);
        assert!(report.messages_for("body").is_empty());
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let report = validate(&fields(&[("title", "   "), ("body", "B")]), &article_like_rules());
        assert!(report.fails());
        assert_eq!(report.messages_for("title"), &["title is required".to_string()]);
    }

    #[test]
    fn min_length_fires_on_present_values_only() {
        let rules = RuleSet::new().field("title", [Rule::MinLength(3)]);
        let report = validate(&fields(&[("title", "ab")]), &rules);
        assert_eq!(report.messages_for("title").len(), 1);

        // Absent field: MinLength alone does not fire.
        let report = validate(&fields(&[]), &rules);
        assert!(!report.fails());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let report = validate(
            &fields(&[("title", "T"), ("body", "B"), ("extra", "x")]),
            &article_like_rules(),
        );
        assert!(!report.fails());
    }

    #[test]
    fn calls_do_not_accumulate_state() {
        let rules = article_like_rules();
        let failing = validate(&fields(&[]), &rules);
        assert!(failing.fails());

        // A later unrelated call starts from a clean report.
        let passing = validate(&fields(&[("title", "T"), ("body", "B")]), &rules);
        assert!(!passing.fails());
        assert!(passing.errors().is_empty());
    }

    #[test]
    fn report_serializes_as_field_error_map() {
        let report = validate(&fields(&[]), &article_like_rules());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["title"][0], "title is required");
        assert_eq!(json["body"][0], "body is required");
    }
}
