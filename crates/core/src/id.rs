//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an article record.
///
/// Ids are assigned by the record store on creation and are immutable
/// afterwards. Prefer passing ids explicitly in tests for determinism.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(u64);

impl ArticleId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ArticleId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ArticleId> for u64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl FromStr for ArticleId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = u64::from_str(s).map_err(|e| DomainError::invalid_id(format!("ArticleId: {e}")))?;
        Ok(Self(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_non_negative_integers() {
        assert_eq!("7".parse::<ArticleId>().unwrap(), ArticleId::from_raw(7));
        assert_eq!("0".parse::<ArticleId>().unwrap(), ArticleId::from_raw(0));
    }

    #[test]
    fn rejects_non_numeric_input() {
        for s in ["abc", "-1", "1.5", ""] {
            assert!(matches!(s.parse::<ArticleId>(), Err(DomainError::InvalidId(_))));
        }
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&ArticleId::from_raw(42)).unwrap();
        assert_eq!(json, "42");
    }
}
