// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Kurbo points.
//!
//! ## Feature
//!
//! Enable with `kurbo`.
//!
//! ## Notes
//!
//! Kurbo works in `f64` while the detector reports `f32` positions, matching the precision of
//! typical platform pointer events. Conversions narrow on the way in and widen on the way out.

use ::kurbo::Point;

use crate::types::PointerEvent;

#[allow(
    clippy::cast_possible_truncation,
    reason = "Pointer coordinates are delivered at f32 precision."
)]
fn narrow(pt: Point) -> (f32, f32) {
    (pt.x as f32, pt.y as f32)
}

/// Build a press at `pt`.
pub fn down_at(pt: Point) -> PointerEvent {
    let (x, y) = narrow(pt);
    PointerEvent::Down { x, y }
}

/// Build a move to `pt`.
pub fn move_to(pt: Point) -> PointerEvent {
    let (x, y) = narrow(pt);
    PointerEvent::Move { x, y }
}

impl PointerEvent {
    /// The event position as a Kurbo point, for `Down` and `Move` events.
    pub fn point(&self) -> Option<Point> {
        self.position()
            .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_map_to_located_events() {
        assert_eq!(
            down_at(Point::new(1.5, -2.0)),
            PointerEvent::Down { x: 1.5, y: -2.0 }
        );
        assert_eq!(
            move_to(Point::new(0.25, 8.0)),
            PointerEvent::Move { x: 0.25, y: 8.0 }
        );
    }

    #[test]
    fn point_widens_position() {
        let e = move_to(Point::new(3.0, 4.0));
        assert_eq!(e.point(), Some(Point::new(3.0, 4.0)));
        assert_eq!(
            PointerEvent::Down { x: -0.5, y: 2.0 }.point(),
            Some(Point::new(-0.5, 2.0))
        );
        assert_eq!(PointerEvent::Up.point(), None);
        assert_eq!(PointerEvent::Cancel.point(), None);
    }
}
