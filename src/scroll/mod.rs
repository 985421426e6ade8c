// SPDX-License-Identifier: MPL-2.0
//! Visibility-triggered pagination for one scrollable region.
//!
//! The controller is a two-state machine, Idle ⇄ Observing, over an
//! injected [`ViewportObserver`]. The host attaches a real sentinel
//! observer behind the trait, calls [`InfiniteScrollController::update`]
//! whenever its feed state changes, and forwards sentinel-visibility
//! events to [`InfiniteScrollController::on_intersection`].
//!
//! # Design
//!
//! - **Attach hysteresis**: the observer is touched only when
//!   `has_more`/`is_loading` change value. Re-creating the observation
//!   on every render cycle is the failure mode this controller exists
//!   to prevent.
//! - **Latest-callback slot**: the load callback lives in a single
//!   mutable slot, replaceable at any time independently of when the
//!   observation was established. A trigger always runs the callback
//!   registered most recently.
//! - **Trigger-time guard**: `has_more && !is_loading` is re-checked
//!   when an intersection event is delivered, not just when the
//!   observation was set up.
//! - **Deterministic teardown**: [`stop`](InfiniteScrollController::stop)
//!   (and `Drop`) detaches the observer; events delivered afterwards
//!   never fire the callback.

mod lookahead;

pub use lookahead::LookaheadMargin;

use crate::activity::{ActivityKind, ActivityLog};
use crate::domain::FeedState;

/// Capability for observing the feed's sentinel element.
///
/// Implemented by the host over whatever intersection primitive its
/// environment provides. The controller owns its observer exclusively
/// and guarantees `attach` and `detach` calls alternate.
pub trait ViewportObserver {
    /// Starts watching the sentinel with the given lookahead margin.
    fn attach(&mut self, margin: LookaheadMargin);

    /// Stops watching the sentinel.
    fn detach(&mut self);
}

/// Whether the sentinel is currently being observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObservationState {
    /// No observation active.
    #[default]
    Idle,
    /// Sentinel attached, watching for visibility.
    Observing,
}

/// Drives page loading from sentinel visibility.
pub struct InfiniteScrollController<O: ViewportObserver> {
    observer: O,
    margin: LookaheadMargin,
    state: ObservationState,
    feed: FeedState,
    started: bool,
    on_load_more: Option<Box<dyn FnMut()>>,
    pages_requested: u64,
}

impl<O: ViewportObserver> InfiniteScrollController<O> {
    /// Creates a stopped controller with the default lookahead margin.
    #[must_use]
    pub fn new(observer: O) -> Self {
        Self::with_margin(observer, LookaheadMargin::default())
    }

    /// Creates a stopped controller with the given lookahead margin.
    #[must_use]
    pub fn with_margin(observer: O, margin: LookaheadMargin) -> Self {
        Self {
            observer,
            margin,
            state: ObservationState::Idle,
            feed: FeedState::initial(),
            started: false,
            on_load_more: None,
            pages_requested: 0,
        }
    }

    /// Replaces the load callback.
    ///
    /// The slot is independent of observation state; the next trigger
    /// uses whatever was registered last, even if registration happened
    /// after the observation was established.
    pub fn set_on_load_more(&mut self, callback: impl FnMut() + 'static) {
        self.on_load_more = Some(Box::new(callback));
    }

    /// Begins the lifecycle with the feed's current state.
    ///
    /// Called by the host when the scrollable region mounts.
    pub fn start(&mut self, feed: FeedState) {
        self.started = true;
        self.feed = feed;
        self.apply(feed.wants_observation());
    }

    /// Re-evaluates observation against a new feed state.
    ///
    /// The observer is attached or detached only when the decision
    /// actually changes; calling this with an unchanged `FeedState` is
    /// free and does not touch the observer.
    pub fn update(&mut self, feed: FeedState) {
        if !self.started || feed == self.feed {
            return;
        }
        self.feed = feed;
        self.apply(feed.wants_observation());
    }

    /// Ends the lifecycle, cancelling any active observation.
    ///
    /// Events delivered after `stop` never fire the callback. The
    /// controller can be restarted with [`start`](Self::start).
    pub fn stop(&mut self) {
        self.started = false;
        self.apply(false);
    }

    /// Delivers a sentinel-visibility event from the host.
    ///
    /// Fires the current load callback exactly once if the controller is
    /// observing and the feed still wants a page at delivery time.
    /// Returns whether the callback fired.
    pub fn on_intersection(&mut self, log: &mut ActivityLog) -> bool {
        if self.state != ObservationState::Observing || !self.feed.wants_observation() {
            return false;
        }
        let Some(callback) = self.on_load_more.as_mut() else {
            return false;
        };
        callback();
        self.pages_requested += 1;
        log.record(ActivityKind::PageRequested);
        true
    }

    /// Current state of the observation machine.
    #[must_use]
    pub fn state(&self) -> ObservationState {
        self.state
    }

    /// Configured lookahead margin.
    #[must_use]
    pub fn margin(&self) -> LookaheadMargin {
        self.margin
    }

    /// Number of page requests fired so far.
    #[must_use]
    pub fn pages_requested(&self) -> u64 {
        self.pages_requested
    }

    /// Read access to the injected observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn apply(&mut self, wanted: bool) {
        match (self.state, wanted) {
            (ObservationState::Idle, true) => {
                self.observer.attach(self.margin);
                self.state = ObservationState::Observing;
            }
            (ObservationState::Observing, false) => {
                self.observer.detach();
                self.state = ObservationState::Idle;
            }
            _ => {}
        }
    }
}

impl<O: ViewportObserver> Drop for InfiniteScrollController<O> {
    fn drop(&mut self) {
        if self.state == ObservationState::Observing {
            self.observer.detach();
        }
    }
}

impl<O: ViewportObserver> std::fmt::Debug for InfiniteScrollController<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfiniteScrollController")
            .field("state", &self.state)
            .field("feed", &self.feed)
            .field("margin", &self.margin)
            .field("started", &self.started)
            .field("has_callback", &self.on_load_more.is_some())
            .field("pages_requested", &self.pages_requested)
            .finish()
    }
}

/// Observer that records attach/detach calls without observing anything.
///
/// Useful for hosts that want a no-op observer during prerendering, and
/// used throughout this crate's tests to assert on observer churn.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    attach_calls: u32,
    detach_calls: u32,
    last_margin: Option<LookaheadMargin>,
}

impl RecordingObserver {
    /// Creates a fresh recording observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `attach` calls received.
    #[must_use]
    pub fn attach_calls(&self) -> u32 {
        self.attach_calls
    }

    /// Number of `detach` calls received.
    #[must_use]
    pub fn detach_calls(&self) -> u32 {
        self.detach_calls
    }

    /// True while attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attach_calls > self.detach_calls
    }

    /// Margin passed to the most recent `attach`.
    #[must_use]
    pub fn last_margin(&self) -> Option<LookaheadMargin> {
        self.last_margin
    }
}

impl ViewportObserver for RecordingObserver {
    fn attach(&mut self, margin: LookaheadMargin) {
        self.attach_calls += 1;
        self.last_margin = Some(margin);
    }

    fn detach(&mut self) {
        self.detach_calls += 1;
    }
}
