// SPDX-License-Identifier: MPL-2.0
//! Theme reading and toggling against the shared store.

use crate::activity::{ActivityKind, ActivityLog};
use crate::config::Preferences;
use crate::domain::Theme;
use crate::store::{StoreReader, UiDispatch};

/// Reads and flips the two-valued theme preference.
///
/// The store is the single source of truth; the controller holds no
/// theme state of its own, so any number of controllers stay consistent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeController;

impl ThemeController {
    /// Current theme from the store.
    #[must_use]
    pub fn theme<S: StoreReader>(store: &S) -> Theme {
        store.theme()
    }

    /// Flips the theme and dispatches the new value to the store.
    ///
    /// Returns the new theme. Two toggles restore the original value.
    pub fn toggle<S>(store: &mut S, log: &mut ActivityLog) -> Theme
    where
        S: StoreReader + UiDispatch,
    {
        let next = store.theme().toggled();
        store.set_theme(next);
        log.record(ActivityKind::ThemeToggled {
            dark: next.is_dark(),
        });
        next
    }

    /// Resolves the theme to use at startup.
    ///
    /// A saved preference wins; otherwise the system theme is detected.
    #[must_use]
    pub fn initial_theme(prefs: &Preferences) -> Theme {
        prefs.theme.unwrap_or_else(Theme::from_system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SharedStore;

    #[test]
    fn toggle_flips_store_theme() {
        let mut store = SharedStore::default();
        let mut log = ActivityLog::default();

        let next = ThemeController::toggle(&mut store, &mut log);
        assert_eq!(next, Theme::Dark);
        assert_eq!(ThemeController::theme(&store), Theme::Dark);
    }

    #[test]
    fn double_toggle_restores_original() {
        let mut store = SharedStore::default();
        let mut log = ActivityLog::default();
        let original = ThemeController::theme(&store);

        ThemeController::toggle(&mut store, &mut log);
        ThemeController::toggle(&mut store, &mut log);

        assert_eq!(ThemeController::theme(&store), original);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn toggle_records_new_value_in_log() {
        let mut store = SharedStore::default();
        let mut log = ActivityLog::default();

        ThemeController::toggle(&mut store, &mut log);
        let event = log.iter().next().expect("toggle should be logged");
        assert_eq!(event.kind, ActivityKind::ThemeToggled { dark: true });
    }

    #[test]
    fn initial_theme_prefers_saved_preference() {
        let prefs = Preferences {
            theme: Some(Theme::Dark),
            ..Preferences::default()
        };
        assert_eq!(ThemeController::initial_theme(&prefs), Theme::Dark);
    }

    #[test]
    fn initial_theme_without_preference_detects_system() {
        let prefs = Preferences::default();
        // System detection depends on the host; only check it settles.
        let theme = ThemeController::initial_theme(&prefs);
        assert!(matches!(theme, Theme::Light | Theme::Dark));
    }
}
