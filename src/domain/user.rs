// SPDX-License-Identifier: MPL-2.0
//! User snapshot and avatar source normalization.
//!
//! Upstream avatar data is polymorphic: either a bare URL string or a
//! record object carrying a `url` field. [`AvatarSource`] is the tagged
//! union that normalizes both shapes at the deserialization boundary, so
//! the resolver never does per-call shape checks.

use super::identity::UserId;
use serde::{Deserialize, Serialize};

/// Avatar image source, normalized from its two wire shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AvatarSource {
    /// Bare URL string.
    Url(String),
    /// Record object with a `url` field (upload records keep extra
    /// metadata server-side; only the URL survives to the client).
    Record { url: String },
}

impl AvatarSource {
    /// Returns the image URL regardless of the original shape.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            AvatarSource::Url(url) | AvatarSource::Record { url } => url,
        }
    }
}

/// Immutable user snapshot supplied by the caller or the shared store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub avatar: Option<AvatarSource>,
}

impl User {
    /// Creates a user snapshot with no avatar.
    #[must_use]
    pub fn new(id: UserId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            avatar: None,
        }
    }

    /// Returns the same user with the given avatar source.
    #[must_use]
    pub fn with_avatar(mut self, avatar: AvatarSource) -> Self {
        self.avatar = Some(avatar);
        self
    }

    /// Full display name, with a graceful fallback when parts are blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let trimmed = full.trim();
        if trimmed.is_empty() {
            self.id.as_str().to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// The user's own normalized avatar URL, if any.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_ref().map(AvatarSource::url)
    }
}
