// SPDX-License-Identifier: MPL-2.0
//! Store seams and the in-memory reference store.
//!
//! Controllers never reach into ambient global state; they are handed a
//! reader for consistent snapshots and a dispatcher for the two UI
//! intents this layer emits (open an auth prompt, set the theme). Hosts
//! with their own state-management layer implement the two traits;
//! [`SharedStore`] is the in-memory implementation used by hosts without
//! one, and by every test in this crate.

use crate::domain::{Session, Theme};

/// Read-only access to shared state.
///
/// Each call returns an atomic, consistent snapshot; controllers never
/// hold on to a snapshot across event-loop turns.
pub trait StoreReader {
    /// Current session snapshot.
    fn session(&self) -> Session;

    /// Current theme preference.
    fn theme(&self) -> Theme;
}

/// Dispatch of UI intents back into shared state.
pub trait UiDispatch {
    /// Requests that an authentication prompt of the given kind be shown.
    fn open_auth_prompt(&mut self, kind: &str);

    /// Persists a new theme preference.
    fn set_theme(&mut self, theme: Theme);
}

/// In-memory store implementing both seams.
///
/// Auth prompt requests are retained so hosts (and tests) can observe
/// which prompts were asked for and in what order.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    session: Session,
    theme: Theme,
    prompt_requests: Vec<String>,
}

impl SharedStore {
    /// Creates a store with the given initial session and theme.
    #[must_use]
    pub fn new(session: Session, theme: Theme) -> Self {
        Self {
            session,
            theme,
            prompt_requests: Vec::new(),
        }
    }

    /// Replaces the session snapshot (login/logout flows live host-side).
    pub fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    /// Auth prompt kinds requested so far, oldest first.
    #[must_use]
    pub fn prompt_requests(&self) -> &[String] {
        &self.prompt_requests
    }

    /// Drains and returns the pending prompt requests.
    pub fn take_prompt_requests(&mut self) -> Vec<String> {
        std::mem::take(&mut self.prompt_requests)
    }
}

impl StoreReader for SharedStore {
    fn session(&self) -> Session {
        self.session.clone()
    }

    fn theme(&self) -> Theme {
        self.theme
    }
}

impl UiDispatch for SharedStore {
    fn open_auth_prompt(&mut self, kind: &str) {
        self.prompt_requests.push(kind.to_string());
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{User, UserId};

    fn user(id: &str) -> User {
        User::new(UserId::new(id).expect("valid id"), "Ada", "Lovelace")
    }

    #[test]
    fn default_store_is_anonymous_and_light() {
        let store = SharedStore::default();
        assert!(!store.session().is_authenticated());
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn set_session_replaces_snapshot() {
        let mut store = SharedStore::default();
        store.set_session(Session::authenticated(user("u1")));
        assert!(store.session().is_authenticated());
    }

    #[test]
    fn prompt_requests_are_recorded_in_order() {
        let mut store = SharedStore::default();
        store.open_auth_prompt("login");
        store.open_auth_prompt("signup");
        assert_eq!(store.prompt_requests(), ["login", "signup"]);

        let drained = store.take_prompt_requests();
        assert_eq!(drained, ["login", "signup"]);
        assert!(store.prompt_requests().is_empty());
    }

    #[test]
    fn set_theme_updates_snapshot() {
        let mut store = SharedStore::default();
        store.set_theme(Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);
    }
}
