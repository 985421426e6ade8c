// SPDX-License-Identifier: MPL-2.0
//! Activity log for controller events.
//!
//! Controllers record what they did (prompted for login, requested a
//! page, toggled the theme, substituted a fallback avatar) into a
//! memory-bounded ring buffer. The host can surface the log in a debug
//! panel or attach it to a support report.
//!
//! The execution model is single-threaded and event-driven, so the log
//! is a plain owned value; hosts that need to share it across
//! controllers wrap it in `Rc<RefCell<_>>`.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::config::{
    DEFAULT_ACTIVITY_BUFFER_CAPACITY, MAX_ACTIVITY_BUFFER_CAPACITY, MIN_ACTIVITY_BUFFER_CAPACITY,
};

/// Validated capacity for the activity buffer.
///
/// Values outside the configured bounds are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_ACTIVITY_BUFFER_CAPACITY, MAX_ACTIVITY_BUFFER_CAPACITY))
    }

    /// Returns the capacity value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_ACTIVITY_BUFFER_CAPACITY)
    }
}

/// One recorded controller action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityKind {
    /// An unauthenticated action was intercepted and a prompt requested.
    AuthPromptRequested { prompt: String },
    /// The scroll controller fired a page request.
    PageRequested,
    /// The theme was toggled to the named value.
    ThemeToggled { dark: bool },
    /// The avatar resolver substituted the placeholder.
    AvatarFallback { wanted: Option<String> },
}

/// A timestamped activity event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: ActivityKind,
}

impl ActivityEvent {
    fn now(kind: ActivityKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// Memory-bounded, chronological log of controller events.
///
/// When the buffer is full, recording a new event evicts the oldest.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    events: VecDeque<ActivityEvent>,
    capacity: usize,
}

impl ActivityLog {
    /// Creates a log with the given capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    /// Records an event, evicting the oldest when at capacity.
    pub fn record(&mut self, kind: ActivityKind) {
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(ActivityEvent::now(kind));
    }

    /// Iterates events in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &ActivityEvent> {
        self.events.iter()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true when no events are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the maximum number of retained events.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clears all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
