// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrub detector implementation.
//!
//! ## Overview
//!
//! Interprets one pointer sequence at a time and decides whether the host should let the
//! detector claim each event.
//!
//! ## Transitions
//!
//! | State       | Event                                  | Effect                                 | Next        |
//! |-------------|----------------------------------------|----------------------------------------|-------------|
//! | `Idle`      | `Down`                                 | record press, arm timer, claim         | `Tracking`  |
//! | `Tracking`  | `Move` before timeout, within slop     | claim                                  | `Tracking`  |
//! | `Tracking`  | `Move` before timeout, past slop       | cancel timer, release                  | `Idle`      |
//! | `Tracking`  | `Move` at or after timeout             | cancel timer, `on_scrub(x, y)`, claim  | `Scrubbing` |
//! | `Tracking`  | timer fires                            | `on_scrub` at the press position       | `Scrubbing` |
//! | `Scrubbing` | `Move`                                 | `on_scrub(x, y)`, claim                | `Scrubbing` |
//! | either      | `Up` / `Cancel`                        | cancel timer, `on_scrub_end()`, claim  | `Idle`      |
//! | `Idle`      | anything else                          | release                                | `Idle`      |
//!
//! While disabled, every pointer event is released without touching the session.

use core::time::Duration;

use crate::host::{Clock, ScrubListener, Scheduler};
use crate::types::{PointerEvent, ScrubConfig, ScrubState};

/// Position and time captured when the pointer went down.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Press {
    x: f32,
    y: f32,
    time: Duration,
}

impl Press {
    /// Signed per-axis comparison: only drags toward positive `x` or `y` can exceed the slop.
    fn exceeds_slop(&self, x: f32, y: f32, slop: f32) -> bool {
        x - self.x > slop || y - self.y > slop
    }
}

/// The live gesture, if any. A pending timer exists exactly while `Tracking`.
#[derive(Copy, Clone, Debug)]
enum Session<H> {
    Idle,
    Tracking { press: Press, pending: H },
    Scrubbing,
}

/// Classifies pointer sequences into scrubs versus taps and swipe-aways.
///
/// ## Usage
///
/// - Construct with [`ScrubDetector::new`], handing over the host's [`Scheduler`], a [`Clock`],
///   and the [`ScrubListener`] that should hear about scrubs.
/// - Call [`ScrubDetector::handle_event`] for every pointer event and honor the returned claim.
/// - When a scheduled callback comes due, call [`ScrubDetector::handle_timeout`] with its handle.
/// - Toggle with [`ScrubDetector::set_enabled`].
///
/// Only one pointer sequence is tracked at a time.
pub struct ScrubDetector<S: Scheduler, C: Clock, L: ScrubListener> {
    config: ScrubConfig,
    enabled: bool,
    session: Session<S::Handle>,
    scheduler: S,
    clock: C,
    listener: L,
}

impl<S: Scheduler, C: Clock, L: ScrubListener> core::fmt::Debug for ScrubDetector<S, C, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrubDetector")
            .field("config", &self.config)
            .field("enabled", &self.enabled)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl<S: Scheduler, C: Clock, L: ScrubListener> ScrubDetector<S, C, L> {
    /// Create an idle detector.
    ///
    /// The touch slop and timeout are fixed for the detector's lifetime; `config.enabled`
    /// seeds the runtime toggle.
    pub fn new(config: ScrubConfig, scheduler: S, clock: C, listener: L) -> Self {
        Self {
            config,
            enabled: config.enabled,
            session: Session::Idle,
            scheduler,
            clock,
            listener,
        }
    }

    /// Enable or disable event interpretation.
    ///
    /// A gesture that is already live is not cancelled. Its pending timer may still fire,
    /// but pointer events are released until the detector is enabled again.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether pointer events are currently interpreted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current gesture state.
    pub fn state(&self) -> ScrubState {
        match self.session {
            Session::Idle => ScrubState::Idle,
            Session::Tracking { .. } => ScrubState::Tracking,
            Session::Scrubbing => ScrubState::Scrubbing,
        }
    }

    /// Whether the live gesture has become a scrub.
    pub fn is_scrubbing(&self) -> bool {
        matches!(self.session, Session::Scrubbing)
    }

    /// Settings the detector was built with.
    pub fn config(&self) -> &ScrubConfig {
        &self.config
    }

    /// Interpret one pointer event.
    ///
    /// Returns `true` if the detector claims the event. When `false`, the host may offer the
    /// event to other handlers.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        if !self.enabled {
            return false;
        }
        match event {
            PointerEvent::Down { x, y } => {
                self.press(x, y);
                true
            }
            PointerEvent::Move { x, y } => self.drag(x, y),
            PointerEvent::Up | PointerEvent::Cancel => self.release(),
        }
    }

    /// Deliver an expired long-press callback.
    ///
    /// Enters scrub mode at the original press position if `handle` is the pending timer.
    /// Returns `false` and does nothing for stale or unknown handles.
    pub fn handle_timeout(&mut self, handle: S::Handle) -> bool {
        match self.session {
            Session::Tracking { press, pending } if pending == handle => {
                tracing::debug!(x = press.x, y = press.y, "long press elapsed; scrubbing");
                self.session = Session::Scrubbing;
                self.listener.on_scrub(press.x, press.y);
                true
            }
            _ => {
                tracing::trace!(?handle, "ignoring stale long-press callback");
                false
            }
        }
    }

    fn press(&mut self, x: f32, y: f32) {
        // The host never sends a second press mid-sequence, but if it does the old timer
        // must not outlive it.
        if let Session::Tracking { pending, .. } = self.session {
            self.scheduler.cancel(pending);
        }
        let press = Press {
            x,
            y,
            time: self.clock.now(),
        };
        let pending = self.scheduler.schedule(self.config.long_press_timeout);
        tracing::trace!(x, y, ?pending, "press armed");
        self.session = Session::Tracking { press, pending };
    }

    fn drag(&mut self, x: f32, y: f32) -> bool {
        match self.session {
            Session::Idle => false,
            Session::Scrubbing => {
                self.listener.on_scrub(x, y);
                true
            }
            Session::Tracking { press, pending } => {
                let elapsed = self.clock.now().saturating_sub(press.time);
                if elapsed >= self.config.long_press_timeout {
                    self.scheduler.cancel(pending);
                    tracing::debug!(x, y, ?elapsed, "held past long press; scrubbing");
                    self.session = Session::Scrubbing;
                    self.listener.on_scrub(x, y);
                    true
                } else if press.exceeds_slop(x, y, self.config.touch_slop) {
                    self.scheduler.cancel(pending);
                    tracing::debug!(x, y, ?elapsed, "moved past touch slop; releasing");
                    self.session = Session::Idle;
                    false
                } else {
                    true
                }
            }
        }
    }

    fn release(&mut self) -> bool {
        match core::mem::replace(&mut self.session, Session::Idle) {
            Session::Idle => false,
            Session::Tracking { pending, .. } => {
                self.scheduler.cancel(pending);
                tracing::trace!("released before long press");
                self.listener.on_scrub_end();
                true
            }
            Session::Scrubbing => {
                tracing::debug!("scrub ended");
                self.listener.on_scrub_end();
                true
            }
        }
    }

    /// The host scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the host scheduler, e.g. to pump its timer queue.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable access to the listener.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Tear down the detector, returning its collaborators.
    ///
    /// A pending timer is cancelled first so it cannot fire into a detector that no longer exists.
    pub fn into_parts(mut self) -> (S, C, L) {
        if let Session::Tracking { pending, .. } = self.session {
            self.scheduler.cancel(pending);
        }
        (self.scheduler, self.clock, self.listener)
    }
}
