// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_scrub::detector::ScrubDetector;
use understory_scrub::host::{ManualClock, ScrubListener, Scheduler};
use understory_scrub::types::{LONG_PRESS_TIMEOUT, PointerEvent, ScrubConfig};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f32(&mut self) -> f32 {
        let v = self.next_u64() >> 40;
        (v as f32) / ((1u64 << 24) as f32)
    }
}

/// Single-slot scheduler; the detector never has more than one timer outstanding.
#[derive(Default)]
struct Slot {
    next: u32,
    pending: Option<u32>,
}

impl Scheduler for Slot {
    type Handle = u32;
    fn schedule(&mut self, _delay: Duration) -> u32 {
        self.next = self.next.wrapping_add(1);
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
struct Sink {
    scrubs: usize,
    ends: usize,
}

impl ScrubListener for Sink {
    fn on_scrub(&mut self, x: f32, y: f32) {
        black_box((x, y));
        self.scrubs += 1;
    }
    fn on_scrub_end(&mut self) {
        self.ends += 1;
    }
}

/// Press, jittered moves `step_ms` apart starting at `first_ms`, then lift.
fn gen_gesture(
    moves: usize,
    first_ms: u64,
    step_ms: u64,
    spread: f32,
    seed: u64,
) -> Vec<(u64, PointerEvent)> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(moves + 2);
    out.push((0, PointerEvent::Down { x: 100.0, y: 100.0 }));
    for i in 0..moves {
        let x = 100.0 + (rng.next_f32() - 0.5) * spread;
        let y = 100.0 + (rng.next_f32() - 0.5) * spread;
        out.push((first_ms + i as u64 * step_ms, PointerEvent::Move { x, y }));
    }
    out.push((first_ms + moves as u64 * step_ms, PointerEvent::Up));
    out
}

fn replay(trace: &[(u64, PointerEvent)]) -> (usize, usize) {
    let clock = ManualClock::new();
    let mut d = ScrubDetector::new(
        ScrubConfig::default(),
        Slot::default(),
        &clock,
        Sink::default(),
    );
    for &(at, event) in trace {
        clock.set(Duration::from_millis(at));
        black_box(d.handle_event(event));
    }
    (d.listener().scrubs, d.listener().ends)
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures");
    for &n in &[16usize, 256, 4096] {
        let long_press = LONG_PRESS_TIMEOUT.as_millis() as u64;
        // 16ms frames starting once the long press has elapsed: every move scrubs.
        let scrub = gen_gesture(n, long_press, 16, 400.0, 0xCAFE_F00D_DEAD_BEEF);
        assert_eq!(replay(&scrub), (n, 1), "scrub trace must scrub on every move");
        // Moves at the press instant, within the slop: every move stays tracked.
        let hold = gen_gesture(n, 0, 0, 8.0, 0xBADC_F00D_1234_5678);
        assert_eq!(replay(&hold), (0, 1), "hold trace must never scrub");
        group.throughput(Throughput::Elements(n as u64 + 2));
        group.bench_function(format!("scrub_n{}", n), |b| {
            b.iter(|| black_box(replay(&scrub)));
        });
        group.bench_function(format!("tracked_hold_n{}", n), |b| {
            b.iter(|| black_box(replay(&hold)));
        });
    }
    group.finish();
}

fn bench_many_taps(c: &mut Criterion) {
    let mut group = c.benchmark_group("taps");
    let taps = 1024;
    let mut trace = Vec::with_capacity(taps * 2);
    for i in 0..taps as u64 {
        trace.push((i * 100, PointerEvent::Down { x: 0.0, y: 0.0 }));
        trace.push((i * 100 + 50, PointerEvent::Up));
    }
    group.throughput(Throughput::Elements(trace.len() as u64));
    group.bench_function("tap_storm", |b| {
        b.iter_batched(
            || trace.clone(),
            |t| black_box(replay(&t)),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_gestures, bench_many_taps);
criterion_main!(benches);
