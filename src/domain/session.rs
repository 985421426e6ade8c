// SPDX-License-Identifier: MPL-2.0
//! Session snapshot read from the shared store.

use super::user::User;
use serde::{Deserialize, Serialize};

/// Authentication state as seen at one point in time.
///
/// Login and logout flows live outside this crate; a `Session` is only
/// ever read here. A session may still carry a user snapshot after
/// logout, so authentication requires both the flag and a present user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
}

impl Session {
    /// An anonymous session with no user.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session authenticated as the given user.
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
        }
    }

    /// A logged-out session that still carries a stale user snapshot.
    #[must_use]
    pub fn logged_out(user: User) -> Self {
        Self {
            authenticated: false,
            user: Some(user),
        }
    }

    /// True only when the flag is set and a user snapshot is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated && self.user.is_some()
    }
}
