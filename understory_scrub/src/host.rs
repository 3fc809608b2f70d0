// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host collaborators: the deferred-callback scheduler, the monotonic clock, and the scrub listener.
//!
//! ## Overview
//!
//! The detector never owns a thread or a timer queue. The host supplies these seams and
//! delivers timer expirations back through
//! [`ScrubDetector::handle_timeout`](crate::detector::ScrubDetector::handle_timeout),
//! on the same thread that delivers pointer events.

use core::cell::Cell;
use core::time::Duration;

/// One-shot deferred callbacks on the event thread.
///
/// When a scheduled delay elapses without having been cancelled, the host calls
/// [`ScrubDetector::handle_timeout`](crate::detector::ScrubDetector::handle_timeout)
/// with the handle returned here.
pub trait Scheduler {
    /// Identifies a scheduled callback.
    type Handle: Copy + Eq + core::fmt::Debug;

    /// Schedule a callback to run once after `delay`.
    fn schedule(&mut self, delay: Duration) -> Self::Handle;

    /// Cancel a callback. Cancelling a handle that already fired must be a no-op.
    fn cancel(&mut self, handle: Self::Handle);
}

/// A monotonic tick source, unaffected by wall-clock adjustments.
///
/// Only differences between two readings are meaningful.
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed origin.
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// A clock that only moves when told to.
///
/// Useful for tests and for replaying recorded event streams. Interior mutability
/// lets a shared reference be handed to the detector while the caller keeps advancing it.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// Create a clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current reading.
    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    /// Move the reading forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// A clock backed by [`std::time::Instant`], measured from construction.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Receives the outcome of gesture classification.
pub trait ScrubListener {
    /// The gesture is (still) a scrub at `(x, y)`.
    ///
    /// Called once on entry into scrub mode and again for every move while scrubbing.
    fn on_scrub(&mut self, x: f32, y: f32);

    /// The pointer sequence that began with the last press has ended.
    fn on_scrub_end(&mut self);
}

impl<L: ScrubListener + ?Sized> ScrubListener for &mut L {
    fn on_scrub(&mut self, x: f32, y: f32) {
        (**self).on_scrub(x, y);
    }

    fn on_scrub_end(&mut self) {
        (**self).on_scrub_end();
    }
}

/// A [`ScrubListener`] built from two closures.
pub struct FnListener<S, E> {
    on_scrub: S,
    on_scrub_end: E,
}

impl<S, E> core::fmt::Debug for FnListener<S, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnListener").finish_non_exhaustive()
    }
}

impl<S: FnMut(f32, f32), E: FnMut()> FnListener<S, E> {
    /// Wrap `on_scrub` and `on_scrub_end`.
    pub fn new(on_scrub: S, on_scrub_end: E) -> Self {
        Self {
            on_scrub,
            on_scrub_end,
        }
    }
}

impl<S: FnMut(f32, f32), E: FnMut()> ScrubListener for FnListener<S, E> {
    fn on_scrub(&mut self, x: f32, y: f32) {
        (self.on_scrub)(x, y);
    }

    fn on_scrub_end(&mut self) {
        (self.on_scrub_end)();
    }
}
