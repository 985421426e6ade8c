// SPDX-License-Identifier: MPL-2.0
//! Avatar URL resolution with fallback-on-failure.
//!
//! Resolution is a pure projection over two snapshots: the `subject`
//! user being displayed and the current `session`. When the subject is
//! the signed-in user, the URL supplied directly on the subject is
//! treated as fresher than the session's cached copy (a just-uploaded
//! avatar shows immediately); for anyone else only the subject's own
//! URL is considered. Image fetching itself belongs to the host's
//! resource loader — this module only decides which URL to ask for and
//! when to substitute the placeholder.

use crate::activity::{ActivityKind, ActivityLog};
use crate::config::{Preferences, DEFAULT_AVATAR_PLACEHOLDER};
use crate::domain::{Session, User};

/// One avatar resolution result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAvatar {
    /// URL the host should load.
    pub url: String,
    /// True when `url` is the placeholder rather than a user image.
    pub is_fallback: bool,
}

/// Resolves the display image URL for a user.
///
/// One resolver instance belongs to one rendered avatar slot; it tracks
/// load-failure state for the URL it most recently resolved, and resets
/// that state whenever resolution lands on a different URL.
#[derive(Debug, Clone)]
pub struct AvatarResolver {
    placeholder: String,
    last_url: Option<String>,
    load_failed: bool,
}

impl AvatarResolver {
    /// Creates a resolver with the built-in placeholder.
    #[must_use]
    pub fn new() -> Self {
        Self::with_placeholder(DEFAULT_AVATAR_PLACEHOLDER)
    }

    /// Creates a resolver with a custom placeholder URL.
    #[must_use]
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            last_url: None,
            load_failed: false,
        }
    }

    /// Creates a resolver using the configured placeholder preference.
    #[must_use]
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self::with_placeholder(prefs.avatar_placeholder())
    }

    /// Resolves the URL to display for `subject`.
    ///
    /// Never mutates either snapshot. Absent identity fields degrade to
    /// "not the same identity"; an absent or previously-failed URL
    /// degrades to the placeholder.
    pub fn resolve(
        &mut self,
        subject: &User,
        session: &Session,
        log: &mut ActivityLog,
    ) -> ResolvedAvatar {
        let session_user = session.user.as_ref();
        let is_same_identity = session_user.is_some_and(|u| u.id == subject.id);

        let candidate = if is_same_identity {
            // The subject snapshot is fresher than the session cache.
            subject
                .avatar_url()
                .or_else(|| session_user.and_then(User::avatar_url))
        } else {
            subject.avatar_url()
        };

        let Some(url) = candidate else {
            self.last_url = None;
            self.load_failed = false;
            return self.fallback(None, log);
        };

        if self.last_url.as_deref() != Some(url) {
            // New resolved URL: give it a fresh chance to load.
            self.last_url = Some(url.to_string());
            self.load_failed = false;
        }

        if self.load_failed {
            return self.fallback(Some(url.to_string()), log);
        }

        ResolvedAvatar {
            url: url.to_string(),
            is_fallback: false,
        }
    }

    /// Reports that loading `url` failed.
    ///
    /// Only a failure for the most recently resolved URL is remembered;
    /// stale reports for URLs the resolver has moved past are ignored.
    pub fn report_load_failure(&mut self, url: &str) {
        if self.last_url.as_deref() == Some(url) {
            self.load_failed = true;
        }
    }

    /// Placeholder URL this resolver substitutes on fallback.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    fn fallback(&self, wanted: Option<String>, log: &mut ActivityLog) -> ResolvedAvatar {
        log.record(ActivityKind::AvatarFallback { wanted });
        ResolvedAvatar {
            url: self.placeholder.clone(),
            is_fallback: true,
        }
    }
}

impl Default for AvatarResolver {
    fn default() -> Self {
        Self::new()
    }
}
