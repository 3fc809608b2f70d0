// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrub basics: classify a tap, a swipe-away, and a scrub.
//!
//! Time is driven by a `ManualClock` and the long-press timer is fired by hand,
//! so the output is deterministic.
//!
//! Run:
//! - `cargo run -p understory_demos --example scrub_basics`

use core::time::Duration;

use understory_scrub::detector::ScrubDetector;
use understory_scrub::host::{ManualClock, ScrubListener, Scheduler};
use understory_scrub::types::{PointerEvent, ScrubConfig};

#[derive(Default)]
struct Timer {
    next: u32,
    pending: Option<u32>,
}

impl Scheduler for Timer {
    type Handle = u32;
    fn schedule(&mut self, _delay: Duration) -> u32 {
        self.next += 1;
        self.pending = Some(self.next);
        self.next
    }
    fn cancel(&mut self, handle: u32) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

#[derive(Default)]
struct Log(Vec<String>);

impl ScrubListener for Log {
    fn on_scrub(&mut self, x: f32, y: f32) {
        self.0.push(format!("scrub({x}, {y})"));
    }
    fn on_scrub_end(&mut self) {
        self.0.push("end".to_string());
    }
}

fn main() {
    let clock = ManualClock::new();
    let mut d = ScrubDetector::new(
        ScrubConfig::default(),
        Timer::default(),
        &clock,
        Log::default(),
    );

    // Tap: press and lift quickly.
    let tap = [
        d.handle_event(PointerEvent::Down { x: 10.0, y: 10.0 }),
        d.handle_event(PointerEvent::Up),
    ];
    println!("== Tap ==\n  claims {:?}\n  calls {:?}", tap, d.listener().0);
    assert_eq!(tap, [true, true]);
    assert_eq!(d.listener().0, ["end"]);
    d.listener_mut().0.clear();

    // Swipe-away: move past the slop before the long press.
    clock.advance(Duration::from_secs(1));
    let swipe = [
        d.handle_event(PointerEvent::Down { x: 10.0, y: 10.0 }),
        d.handle_event(PointerEvent::Move { x: 40.0, y: 10.0 }),
        d.handle_event(PointerEvent::Up),
    ];
    println!(
        "== Swipe ==\n  claims {:?}\n  calls {:?}",
        swipe,
        d.listener().0
    );
    assert_eq!(swipe, [true, false, false]);
    assert!(d.listener().0.is_empty());

    // Scrub: hold until the timer fires, then drag in both directions.
    clock.advance(Duration::from_secs(1));
    d.handle_event(PointerEvent::Down { x: 20.0, y: 5.0 });
    clock.advance(Duration::from_millis(260));
    if let Some(handle) = d.scheduler_mut().pending.take() {
        d.handle_timeout(handle);
    }
    d.handle_event(PointerEvent::Move { x: 25.0, y: 6.0 });
    d.handle_event(PointerEvent::Move { x: 2.0, y: 6.0 });
    d.handle_event(PointerEvent::Up);
    println!("== Scrub ==\n  calls {:?}", d.listener().0);
    assert_eq!(
        d.listener().0,
        ["scrub(20, 5)", "scrub(25, 6)", "scrub(2, 6)", "end"]
    );
}
