// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for user preferences.

/// Default lookahead margin for infinite scroll, in viewport distance-units.
///
/// The sentinel is considered visible this far before it actually enters
/// the viewport, so the next page starts loading ahead of the scroll.
pub const DEFAULT_LOOKAHEAD_MARGIN: u32 = 400;

/// Minimum lookahead margin (no lookahead, trigger on actual visibility).
pub const MIN_LOOKAHEAD_MARGIN: u32 = 0;

/// Maximum lookahead margin.
pub const MAX_LOOKAHEAD_MARGIN: u32 = 4000;

/// Default placeholder shown when no valid avatar URL is resolvable.
pub const DEFAULT_AVATAR_PLACEHOLDER: &str = "/img/avatar-default.png";

/// Default capacity of the activity event buffer.
pub const DEFAULT_ACTIVITY_BUFFER_CAPACITY: usize = 1000;

/// Minimum capacity of the activity event buffer.
pub const MIN_ACTIVITY_BUFFER_CAPACITY: usize = 100;

/// Maximum capacity of the activity event buffer.
pub const MAX_ACTIVITY_BUFFER_CAPACITY: usize = 10_000;
