// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host input records for the wheel and pinch adapters.
//!
//! The controller never sees native events. Hosts copy the handful of fields
//! needed here out of their DOM, winit or touch events.

use kurbo::Point;

/// Zoom step per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// The parts of a wheel event the controller uses.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelInput {
    /// Cursor x in client (page) coordinates.
    pub client_x: f64,
    /// Cursor y in client (page) coordinates.
    pub client_y: f64,
    /// Vertical scroll delta; positive scrolls down.
    pub delta_y: f64,
}

impl WheelInput {
    /// Zoom factor for this event: zoom out on positive `delta_y`, in
    /// otherwise. Only the sign of the delta matters.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        if self.delta_y > 0.0 {
            1.0 / WHEEL_ZOOM_STEP
        } else {
            WHEEL_ZOOM_STEP
        }
    }
}

/// Client‑space rectangle of the element hosting the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    /// Left edge in client coordinates.
    pub left: f64,
    /// Top edge in client coordinates.
    pub top: f64,
    /// Element width.
    pub width: f64,
    /// Element height.
    pub height: f64,
}

impl ElementRect {
    /// Converts a client‑space position into element‑local pixels.
    #[must_use]
    pub fn to_local(&self, client_x: f64, client_y: f64) -> Point {
        Point::new(client_x - self.left, client_y - self.top)
    }
}

/// Zoom factor and anchor for one pinch step, or `None` if the step carries
/// no usable scale information.
pub(crate) fn pinch_step(
    t1: Point,
    t2: Point,
    prev_t1: Option<Point>,
    prev_t2: Option<Point>,
) -> Option<(f64, Point)> {
    let (prev_t1, prev_t2) = (prev_t1?, prev_t2?);
    let previous = prev_t1.distance(prev_t2);
    if previous == 0.0 {
        return None;
    }
    let current = t1.distance(t2);
    Some((current / previous, t1.midpoint(t2)))
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{ElementRect, WHEEL_ZOOM_STEP, WheelInput, pinch_step};

    #[test]
    fn wheel_direction_selects_factor() {
        let down = WheelInput {
            delta_y: 120.0,
            ..WheelInput::default()
        };
        let up = WheelInput {
            delta_y: -3.0,
            ..WheelInput::default()
        };
        assert_eq!(down.zoom_factor(), 1.0 / WHEEL_ZOOM_STEP);
        assert_eq!(up.zoom_factor(), WHEEL_ZOOM_STEP);
        assert_eq!(WheelInput::default().zoom_factor(), WHEEL_ZOOM_STEP);
    }

    #[test]
    fn element_local_coordinates() {
        let rect = ElementRect {
            left: 20.0,
            top: 50.0,
            width: 400.0,
            height: 300.0,
        };
        assert_eq!(rect.to_local(120.0, 80.0), Point::new(100.0, 30.0));
    }

    #[test]
    fn pinch_requires_previous_touches() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!(pinch_step(a, b, None, Some(b)).is_none());
        assert!(pinch_step(a, b, Some(a), None).is_none());
        assert!(pinch_step(a, b, Some(a), Some(a)).is_none());
    }

    #[test]
    fn pinch_factor_and_midpoint() {
        let (factor, center) = pinch_step(
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Some(Point::new(5.0, 0.0)),
            Some(Point::new(15.0, 0.0)),
        )
        .unwrap();
        assert_eq!(factor, 2.0);
        assert_eq!(center, Point::new(10.0, 0.0));
    }
}
