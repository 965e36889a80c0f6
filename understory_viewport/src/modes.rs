// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How pointer movement during a drag is turned into a pan.
///
/// Consulted by [`crate::ViewportController::update_pan`]. Plain
/// [`crate::ViewportController::pan`] calls are never affected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragPanMode {
    /// Divide the pointer delta by the current scale before panning.
    ///
    /// Since the pan offset is in screen pixels, content moves slower than
    /// the pointer when zoomed in and faster when zoomed out.
    #[default]
    ScaleDamped,
    /// Pan by the raw pointer delta, so grabbed content tracks the pointer
    /// one to one at every zoom level.
    ScreenPixels,
}
