// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient pointer interaction state.

use kurbo::{Point, Vec2};

use crate::CanvasTransform;

/// Bookkeeping for an active drag pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGesture {
    /// Pointer position passed to [`crate::ViewportController::start_pan`].
    pub start_position: Point,
    /// Pointer position of the most recent update.
    pub last_pointer_position: Point,
    /// Transform snapshot taken when the drag started.
    pub start_transform: CanvasTransform,
}

impl PanGesture {
    /// Records the new pointer position and returns the delta from the
    /// previous one.
    pub(crate) fn advance(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last_pointer_position;
        self.last_pointer_position = pos;
        delta
    }

    /// Total pointer offset from the start of the drag.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.last_pointer_position - self.start_position
    }
}

/// Interaction state machine: `Idle` until a drag starts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
    /// No pointer interaction in progress.
    #[default]
    Idle,
    /// A drag pan is in progress.
    Panning(PanGesture),
}

impl InteractionState {
    /// Returns `true` while a drag pan is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning(_))
    }

    /// The active drag, if any.
    #[must_use]
    pub fn pan_gesture(&self) -> Option<&PanGesture> {
        match self {
            Self::Panning(gesture) => Some(gesture),
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{InteractionState, PanGesture};
    use crate::{CanvasTransform, Viewport};

    fn gesture_at(p: Point) -> PanGesture {
        PanGesture {
            start_position: p,
            last_pointer_position: p,
            start_transform: CanvasTransform::from_viewport(&Viewport::new(10.0, 10.0)),
        }
    }

    #[test]
    fn idle_by_default() {
        let state = InteractionState::default();
        assert!(!state.is_panning());
        assert!(state.pan_gesture().is_none());
    }

    #[test]
    fn advance_tracks_incremental_and_total_deltas() {
        let mut g = gesture_at(Point::new(10.0, 20.0));
        assert_eq!(g.advance(Point::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
        assert_eq!(g.advance(Point::new(12.0, 30.0)), Vec2::new(-3.0, 5.0));
        assert_eq!(g.total_offset(), Vec2::new(2.0, 10.0));
        assert_eq!(g.last_pointer_position, Point::new(12.0, 30.0));
    }

    #[test]
    fn panning_exposes_gesture() {
        let state = InteractionState::Panning(gesture_at(Point::ORIGIN));
        assert!(state.is_panning());
        assert_eq!(state.pan_gesture().unwrap().start_position, Point::ORIGIN);
    }
}
