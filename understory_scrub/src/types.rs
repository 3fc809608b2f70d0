// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the detector: pointer events, gesture states, and configuration.

use core::time::Duration;

/// How long a press must be held before it becomes a scrub.
pub const LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(250);

/// Drag threshold in logical units used when the host does not supply one.
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// A single-pointer input event, in host coordinates.
///
/// Fed to [`ScrubDetector::handle_event`](crate::detector::ScrubDetector::handle_event).
/// The host guarantees at most one `Down` before the matching `Up` or `Cancel`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer was pressed.
    Down {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// The pressed pointer moved.
    Move {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// The pointer was released.
    Up,
    /// The host aborted the pointer sequence.
    Cancel,
}

impl PointerEvent {
    /// Returns the event position for `Down` and `Move`, `None` otherwise.
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::Down { x, y } | Self::Move { x, y } => Some((x, y)),
            Self::Up | Self::Cancel => None,
        }
    }
}

/// Where the detector is within a pointer sequence.
///
/// Returned by [`ScrubDetector::state`](crate::detector::ScrubDetector::state).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ScrubState {
    /// No gesture is live.
    #[default]
    Idle,
    /// A press is held and the long-press timer is pending.
    Tracking,
    /// The press became a scrub; every move is reported.
    Scrubbing,
}

/// Construction-time settings for a [`ScrubDetector`](crate::detector::ScrubDetector).
///
/// ```
/// use core::time::Duration;
/// use understory_scrub::types::ScrubConfig;
///
/// let config = ScrubConfig::default()
///     .with_touch_slop(12.0)
///     .with_long_press_timeout(Duration::from_millis(400));
/// assert!(config.enabled);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrubConfig {
    /// Distance a press may travel before it is treated as a swipe-away.
    ///
    /// Same units as event coordinates. Typically the host's drag threshold.
    pub touch_slop: f32,
    /// Hold time after which a press becomes a scrub.
    pub long_press_timeout: Duration,
    /// Initial value of the enable toggle.
    pub enabled: bool,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            touch_slop: DEFAULT_TOUCH_SLOP,
            long_press_timeout: LONG_PRESS_TIMEOUT,
            enabled: true,
        }
    }
}

impl ScrubConfig {
    /// Replace the touch slop.
    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// Replace the long-press timeout.
    #[must_use]
    pub fn with_long_press_timeout(mut self, timeout: Duration) -> Self {
        self.long_press_timeout = timeout;
        self
    }

    /// Replace the initial enable toggle.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_only_for_located_events() {
        assert_eq!(
            PointerEvent::Down { x: 1.0, y: 2.0 }.position(),
            Some((1.0, 2.0))
        );
        assert_eq!(
            PointerEvent::Move { x: -3.5, y: 0.0 }.position(),
            Some((-3.5, 0.0))
        );
        assert_eq!(PointerEvent::Up.position(), None);
        assert_eq!(PointerEvent::Cancel.position(), None);
    }

    #[test]
    fn default_config_matches_platform_conventions() {
        let c = ScrubConfig::default();
        assert_eq!(c.long_press_timeout, Duration::from_millis(250));
        assert_eq!(c.touch_slop, DEFAULT_TOUCH_SLOP);
        assert!(c.enabled);
    }

    #[test]
    fn builders_replace_single_fields() {
        let c = ScrubConfig::default()
            .with_touch_slop(3.0)
            .with_enabled(false);
        assert_eq!(c.touch_slop, 3.0);
        assert!(!c.enabled);
        assert_eq!(c.long_press_timeout, LONG_PRESS_TIMEOUT);
    }
}
