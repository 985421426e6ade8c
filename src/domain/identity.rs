// SPDX-License-Identifier: MPL-2.0
//! User identity newtype and ingestion-boundary normalization.
//!
//! Upstream records are inconsistent about where the identifier lives:
//! newer payloads carry `id`, older ones `_id`. That inconsistency is
//! resolved exactly once, here, when raw data enters the crate. Everything
//! downstream works with a normalized [`UserId`] and plain equality.

use serde::{Deserialize, Serialize};

/// Normalized, non-blank user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a `UserId` from an already-normalized identifier.
    ///
    /// Returns `None` for empty or whitespace-only input.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    /// Normalizes a raw record's identifier fields.
    ///
    /// Prefers the modern `id` field; falls back to the legacy `_id` field.
    /// Blank values are treated as absent on both sides.
    #[must_use]
    pub fn from_raw(id: Option<&str>, legacy_id: Option<&str>) -> Option<Self> {
        id.and_then(Self::new).or_else(|| legacy_id.and_then(Self::new))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_blank_identifiers() {
        assert!(UserId::new("").is_none());
        assert!(UserId::new("   ").is_none());
        assert!(UserId::new("u1").is_some());
    }

    #[test]
    fn from_raw_prefers_modern_id_field() {
        let id = UserId::from_raw(Some("u1"), Some("legacy")).expect("id should normalize");
        assert_eq!(id.as_str(), "u1");
    }

    #[test]
    fn from_raw_falls_back_to_legacy_field() {
        let id = UserId::from_raw(None, Some("legacy")).expect("legacy id should normalize");
        assert_eq!(id.as_str(), "legacy");

        let blank_modern = UserId::from_raw(Some("  "), Some("legacy"));
        assert_eq!(blank_modern.map(|i| i.as_str().to_string()), Some("legacy".to_string()));
    }

    #[test]
    fn from_raw_returns_none_when_both_absent() {
        assert!(UserId::from_raw(None, None).is_none());
        assert!(UserId::from_raw(Some(""), Some(" ")).is_none());
    }

    #[test]
    fn equality_is_plain_string_equality() {
        assert_eq!(UserId::new("u1"), UserId::new("u1"));
        assert_ne!(UserId::new("u1"), UserId::new("u2"));
    }
}
