// SPDX-License-Identifier: MPL-2.0
//! Lookahead margin domain type for infinite scroll.
//!
//! This module provides a type-safe wrapper for the distance ahead of
//! the viewport at which the sentinel counts as visible.

use crate::config::{DEFAULT_LOOKAHEAD_MARGIN, MAX_LOOKAHEAD_MARGIN, MIN_LOOKAHEAD_MARGIN};

/// Lookahead margin in viewport distance-units.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0–4000 distance-units).
///
/// # Example
///
/// ```
/// use feedglass::scroll::LookaheadMargin;
///
/// let margin = LookaheadMargin::new(250);
/// assert_eq!(margin.value(), 250);
///
/// // Values outside range are clamped
/// let too_high = LookaheadMargin::new(100_000);
/// assert_eq!(too_high.value(), 4000); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookaheadMargin(u32);

impl LookaheadMargin {
    /// Creates a new lookahead margin, clamping to the valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_LOOKAHEAD_MARGIN, MAX_LOOKAHEAD_MARGIN))
    }

    /// Returns the margin in distance-units.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns true if the margin disables lookahead entirely.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for LookaheadMargin {
    fn default() -> Self {
        Self(DEFAULT_LOOKAHEAD_MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(LookaheadMargin::new(0).value(), MIN_LOOKAHEAD_MARGIN);
        assert_eq!(LookaheadMargin::new(100_000).value(), MAX_LOOKAHEAD_MARGIN);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(LookaheadMargin::new(1).value(), 1);
        assert_eq!(LookaheadMargin::new(400).value(), 400);
        assert_eq!(LookaheadMargin::new(4000).value(), 4000);
    }

    #[test]
    fn default_returns_expected_value() {
        assert_eq!(LookaheadMargin::default().value(), DEFAULT_LOOKAHEAD_MARGIN);
    }

    #[test]
    fn is_zero_detects_disabled_lookahead() {
        assert!(LookaheadMargin::new(0).is_zero());
        assert!(!LookaheadMargin::default().is_zero());
    }

    #[test]
    fn equality_works() {
        assert_eq!(LookaheadMargin::new(5), LookaheadMargin::new(5));
        assert_ne!(LookaheadMargin::new(5), LookaheadMargin::new(10));
    }
}
