// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scrub --heading-base-level=0

//! Understory Scrub: a deterministic, `no_std` detector for scrub gestures.
//!
//! ## Overview
//!
//! A scrub is a sustained press-and-drag used to inspect data points on an interactive chart.
//! This crate classifies a stream of single-pointer events into either a scrub or an incidental
//! tap or swipe-away, and reports scrub positions to a listener.
//! It does not render feedback, transform coordinates, or deliver platform events.
//!
//! ## Policy
//!
//! - A press arms a long-press timer ([`LONG_PRESS_TIMEOUT`](crate::types::LONG_PRESS_TIMEOUT) by default).
//! - Moving past the touch slop before the timer elapses releases the gesture so another handler
//!   (for example a scroll container) can claim it.
//! - Once the timer elapses, either autonomously or as observed by a later move, every move is a scrub.
//! - Lifting or canceling ends the gesture and notifies the listener exactly once.
//!
//! The slop test compares the *signed* delta from the press position against the slop on each axis.
//! Drags toward negative `x` or `y` never release the gesture on their own.
//!
//! ## Host collaborators
//!
//! The detector is generic over three seams from [`host`](crate::host):
//! - [`Scheduler`](crate::host::Scheduler) posts and cancels the one-shot long-press callback.
//!   When it fires, the host calls [`ScrubDetector::handle_timeout`](crate::detector::ScrubDetector::handle_timeout).
//! - [`Clock`](crate::host::Clock) is a monotonic tick source.
//! - [`ScrubListener`](crate::host::ScrubListener) receives `on_scrub(x, y)` and `on_scrub_end()`.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use understory_scrub::detector::ScrubDetector;
//! use understory_scrub::host::{FnListener, ManualClock, Scheduler};
//! use understory_scrub::types::{PointerEvent, ScrubConfig, ScrubState};
//!
//! /// A scheduler that only remembers the last posted handle.
//! #[derive(Default)]
//! struct OneShot {
//!     next: u32,
//!     pending: Option<u32>,
//! }
//!
//! impl Scheduler for OneShot {
//!     type Handle = u32;
//!     fn schedule(&mut self, _delay: Duration) -> u32 {
//!         self.next += 1;
//!         self.pending = Some(self.next);
//!         self.next
//!     }
//!     fn cancel(&mut self, handle: u32) {
//!         if self.pending == Some(handle) {
//!             self.pending = None;
//!         }
//!     }
//! }
//!
//! let clock = ManualClock::new();
//! let mut scrubs = 0;
//! let listener = FnListener::new(|_x, _y| scrubs += 1, || {});
//! let mut detector = ScrubDetector::new(ScrubConfig::default(), OneShot::default(), &clock, listener);
//!
//! assert!(detector.handle_event(PointerEvent::Down { x: 10.0, y: 10.0 }));
//! clock.advance(Duration::from_millis(300));
//! assert!(detector.handle_event(PointerEvent::Move { x: 40.0, y: 10.0 }));
//! assert_eq!(detector.state(), ScrubState::Scrubbing);
//! assert!(detector.handle_event(PointerEvent::Up));
//! drop(detector);
//! assert_eq!(scrubs, 1);
//! ```
//!
//! ## Threading
//!
//! All events and timer callbacks are expected on one thread, in order.
//! The detector holds plain owned state and takes `&mut self`; it performs no locking.
//!
//! This crate is `no_std`. Enable `std` for [`StdClock`](crate::host::StdClock) and `kurbo` for
//! [`adapters::kurbo`](crate::adapters).

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod adapters;
pub mod detector;
pub mod host;
pub mod types;
