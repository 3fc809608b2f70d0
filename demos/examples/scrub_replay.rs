// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a timestamped pointer trace through a host-style timer queue.
//!
//! The host owns a deadline-ordered queue. Before each event it fires every
//! callback whose deadline has passed, as a UI thread's event loop would.
//! Events are built from Kurbo points.
//!
//! Run:
//! - `RUST_LOG=understory_scrub=trace cargo run -p understory_demos --example scrub_replay`

use core::cmp::Reverse;
use core::time::Duration;
use std::collections::BinaryHeap;

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_scrub::adapters::kurbo::{down_at, move_to};
use understory_scrub::detector::ScrubDetector;
use understory_scrub::host::{Clock, FnListener, ManualClock, Scheduler};
use understory_scrub::types::{PointerEvent, ScrubConfig};

/// Deadline-ordered one-shot callbacks, keyed by an increasing id.
struct TimerQueue<'a> {
    clock: &'a ManualClock,
    next: u64,
    queue: BinaryHeap<Reverse<(Duration, u64)>>,
    cancelled: Vec<u64>,
}

impl<'a> TimerQueue<'a> {
    fn new(clock: &'a ManualClock) -> Self {
        Self {
            clock,
            next: 0,
            queue: BinaryHeap::new(),
            cancelled: Vec::new(),
        }
    }

    /// Pop the next live callback due at or before `now`, with its deadline.
    fn pop_due(&mut self, now: Duration) -> Option<(Duration, u64)> {
        while let Some(&Reverse((deadline, id))) = self.queue.peek() {
            if deadline > now {
                return None;
            }
            self.queue.pop();
            if let Some(i) = self.cancelled.iter().position(|&c| c == id) {
                self.cancelled.swap_remove(i);
                continue;
            }
            return Some((deadline, id));
        }
        None
    }
}

impl Scheduler for TimerQueue<'_> {
    type Handle = u64;

    fn schedule(&mut self, delay: Duration) -> u64 {
        self.next += 1;
        self.queue.push(Reverse((self.clock.now() + delay, self.next)));
        self.next
    }

    fn cancel(&mut self, handle: u64) {
        if self.queue.iter().any(|Reverse((_, id))| *id == handle) {
            self.cancelled.push(handle);
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,understory_scrub=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // (milliseconds since start, event)
    let trace: Vec<(u64, PointerEvent)> = vec![
        // A quick flick to the right: released to the host.
        (0, down_at(Point::new(100.0, 50.0))),
        (40, move_to(Point::new(130.0, 52.0))),
        (80, PointerEvent::Up),
        // A held press that becomes a scrub before it moves.
        (1_000, down_at(Point::new(200.0, 60.0))),
        (1_400, move_to(Point::new(210.0, 60.0))),
        (1_450, move_to(Point::new(180.0, 61.0))),
        (1_500, PointerEvent::Cancel),
    ];

    let clock = ManualClock::new();
    let mut scrubs = Vec::new();
    let mut ends = 0_u32;
    let mut claims = Vec::new();
    {
        let listener = FnListener::new(
            |x, y| scrubs.push((clock.now(), Point::new(f64::from(x), f64::from(y)))),
            || ends += 1,
        );
        let mut detector = ScrubDetector::new(
            ScrubConfig::default(),
            TimerQueue::new(&clock),
            &clock,
            listener,
        );

        for (at, event) in trace {
            let now = Duration::from_millis(at);
            while let Some((deadline, id)) = detector.scheduler_mut().pop_due(now) {
                clock.set(deadline);
                let fired = detector.handle_timeout(id);
                tracing::info!(at = ?deadline, id, fired, "timer fired");
            }
            clock.set(now);
            let point = event.point();
            let claimed = detector.handle_event(event);
            tracing::info!(at, ?event, ?point, claimed, state = ?detector.state(), "replayed");
            claims.push(claimed);
        }
    }

    println!("== Replay ==\n  claims {claims:?}\n  scrubs {scrubs:?}\n  ends {ends}");
    assert_eq!(claims, [true, false, false, true, true, true, true]);
    assert_eq!(
        scrubs,
        [
            (Duration::from_millis(1_250), Point::new(200.0, 60.0)),
            (Duration::from_millis(1_400), Point::new(210.0, 60.0)),
            (Duration::from_millis(1_450), Point::new(180.0, 61.0)),
        ]
    );
    assert_eq!(ends, 1);
}
