// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_affine::BoundingBox;

/// Pan/zoom state of a fixed‑size device viewport.
///
/// `x`/`y` is the screen‑space translation applied after scaling, so a world
/// point `p` lands at `p * scale + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Horizontal pan in screen pixels.
    pub x: f64,
    /// Vertical pan in screen pixels.
    pub y: f64,
    /// Device width in pixels. Fixed for the life of a controller.
    pub width: f64,
    /// Device height in pixels. Fixed for the life of a controller.
    pub height: f64,
    /// World to screen zoom factor.
    pub scale: f64,
    /// Rotation in radians.
    ///
    /// Stored and reported, but not applied by any transform or coordinate
    /// conversion.
    pub rotation: f64,
}

impl Viewport {
    /// A `width` × `height` viewport at the origin with unit scale.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    pub(crate) fn apply(&mut self, update: ViewportUpdate) {
        if let Some(x) = update.x {
            self.x = x;
        }
        if let Some(y) = update.y {
            self.y = y;
        }
        if let Some(scale) = update.scale {
            self.scale = scale;
        }
        if let Some(rotation) = update.rotation {
            self.rotation = rotation;
        }
    }
}

/// Partial viewport state merged in by the controller's mutation pipeline.
///
/// `None` fields keep their current value. The viewport size is not part of
/// the update because the controller never changes it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportUpdate {
    /// New horizontal pan.
    pub x: Option<f64>,
    /// New vertical pan.
    pub y: Option<f64>,
    /// New scale, clamped into the constraint range on commit.
    pub scale: Option<f64>,
    /// New stored rotation.
    pub rotation: Option<f64>,
}

/// Limits enforced after every viewport mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Constraints {
    /// Smallest allowed scale. Default `0.1`.
    pub min_scale: f64,
    /// Largest allowed scale. Default `10`.
    pub max_scale: f64,
    /// Carried for hosts. Scale is always uniform, so the controller does
    /// nothing further with it.
    pub lock_aspect_ratio: bool,
    /// Round the pan offset to multiples of `grid_size` while not dragging.
    pub snap_to_grid: bool,
    /// Grid pitch in screen pixels. Default `10`.
    pub grid_size: f64,
    /// Content bounds used to keep part of the content on screen.
    pub bounding_box: Option<BoundingBox>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            min_scale: 0.1,
            max_scale: 10.0,
            lock_aspect_ratio: false,
            snap_to_grid: false,
            grid_size: 10.0,
            bounding_box: None,
        }
    }
}

impl Constraints {
    /// Clamps `scale` into `[min_scale, max_scale]`.
    ///
    /// Unlike [`f64::clamp`] this never panics on inverted limits, and a NaN
    /// input stays NaN.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        clamp(scale, self.min_scale, self.max_scale)
    }
}

/// `max(lo, min(hi, value))` that propagates NaN and tolerates `lo > hi`.
///
/// The upper bound is applied first, so inverted limits resolve to `lo`.
pub(crate) fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    let value = if value > hi { hi } else { value };
    if value < lo { lo } else { value }
}

#[cfg(test)]
mod tests {
    use super::{Constraints, Viewport, ViewportUpdate, clamp};

    #[test]
    fn defaults() {
        let c = Constraints::default();
        assert_eq!(c.min_scale, 0.1);
        assert_eq!(c.max_scale, 10.0);
        assert!(!c.lock_aspect_ratio);
        assert!(!c.snap_to_grid);
        assert_eq!(c.grid_size, 10.0);
        assert!(c.bounding_box.is_none());
    }

    #[test]
    fn update_merges_only_present_fields() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.apply(ViewportUpdate {
            x: Some(5.0),
            scale: Some(2.0),
            ..ViewportUpdate::default()
        });
        assert_eq!(vp.x, 5.0);
        assert_eq!(vp.y, 0.0);
        assert_eq!(vp.scale, 2.0);
        assert_eq!(vp.width, 800.0);
    }

    #[test]
    fn clamp_keeps_nan_and_never_panics() {
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
        assert_eq!(clamp(5.0, 2.0, 1.0), 2.0);
        assert_eq!(clamp(0.0, 2.0, 1.0), 2.0);
        assert_eq!(clamp(f64::NEG_INFINITY, 0.1, 10.0), 0.1);
        assert_eq!(clamp(f64::INFINITY, 0.1, 10.0), 10.0);
        assert_eq!(Constraints::default().clamp_scale(0.01), 0.1);
    }
}
