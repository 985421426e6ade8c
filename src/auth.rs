// SPDX-License-Identifier: MPL-2.0
//! Auth gating for user-initiated actions.
//!
//! Anything a signed-out visitor must not do (posting, liking,
//! following) goes through [`AuthGuard::require_auth`]: the action runs
//! synchronously when the session is authenticated, and otherwise an
//! authentication prompt is requested through the store instead. There
//! is no error path; this is a pure branch.

use crate::activity::{ActivityKind, ActivityLog};
use crate::store::{StoreReader, UiDispatch};

/// Kind of authentication prompt to request for unauthenticated callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptKind(String);

impl PromptKind {
    /// Creates a prompt kind.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    /// Returns the prompt kind as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PromptKind {
    fn default() -> Self {
        Self("login".to_string())
    }
}

/// What [`AuthGuard::require_auth`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The session was authenticated and the action ran.
    Performed,
    /// The action was withheld and a prompt was requested.
    PromptRequested,
}

/// Gates actions behind the session's authentication state.
#[derive(Debug, Clone, Default)]
pub struct AuthGuard {
    prompt: PromptKind,
}

impl AuthGuard {
    /// Creates a guard that requests the default `"login"` prompt.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a guard that requests the given prompt kind.
    #[must_use]
    pub fn with_prompt(prompt: PromptKind) -> Self {
        Self { prompt }
    }

    /// Runs `action` if the store's session is authenticated; otherwise
    /// requests an authentication prompt and leaves `action` unrun.
    ///
    /// The session is re-read from the store on every call, so a guard
    /// constructed before login works correctly after it.
    pub fn require_auth<S, F>(&self, store: &mut S, log: &mut ActivityLog, action: F) -> AuthOutcome
    where
        S: StoreReader + UiDispatch,
        F: FnOnce(),
    {
        if store.session().is_authenticated() {
            action();
            AuthOutcome::Performed
        } else {
            store.open_auth_prompt(self.prompt.as_str());
            log.record(ActivityKind::AuthPromptRequested {
                prompt: self.prompt.as_str().to_string(),
            });
            AuthOutcome::PromptRequested
        }
    }
}
