// SPDX-License-Identifier: MPL-2.0
//! Transient pagination state for one scrollable feed.

/// Pagination state owned by the feed view and read by the scroll
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedState {
    /// Whether the backend reports further pages.
    pub has_more: bool,
    /// Whether a page request is currently in flight.
    pub is_loading: bool,
}

impl FeedState {
    /// Initial state of a fresh feed: more pages assumed, nothing in flight.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            has_more: true,
            is_loading: false,
        }
    }

    /// Whether the sentinel should be observed at all.
    ///
    /// Firing a page request while one is in flight, or when the feed is
    /// exhausted, risks duplicate-page requests; this predicate is the
    /// single guard for both the attach decision and the trigger check.
    #[must_use]
    pub fn wants_observation(self) -> bool {
        self.has_more && !self.is_loading
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_wants_observation() {
        assert!(FeedState::initial().wants_observation());
    }

    #[test]
    fn loading_state_suppresses_observation() {
        let state = FeedState {
            has_more: true,
            is_loading: true,
        };
        assert!(!state.wants_observation());
    }

    #[test]
    fn exhausted_feed_suppresses_observation() {
        let state = FeedState {
            has_more: false,
            is_loading: false,
        };
        assert!(!state.wants_observation());
    }
}
