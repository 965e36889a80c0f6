// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use understory_affine::AffineMatrix;

use crate::Viewport;

/// World to screen transform derived from a [`Viewport`].
///
/// Built fresh by [`crate::ViewportController::transform`]; never stored by
/// the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasTransform {
    /// Scale followed by translation. Rotation is not included.
    pub matrix: AffineMatrix,
    /// The viewport the transform was derived from.
    pub viewport: Viewport,
    /// Uniform scale.
    pub scale: f64,
    /// Screen‑space translation, `(x, y)`.
    pub translation: Vec2,
    /// Stored viewport rotation, for reporting only.
    pub rotation: f64,
    /// Transform origin; always the world origin.
    pub origin: Point,
}

impl CanvasTransform {
    /// Derives the transform for `viewport`.
    #[must_use]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        let matrix = AffineMatrix::scale(viewport.scale)
            .multiply(&AffineMatrix::translation(viewport.x, viewport.y));
        Self {
            matrix,
            viewport: *viewport,
            scale: viewport.scale,
            translation: Vec2::new(viewport.x, viewport.y),
            rotation: viewport.rotation,
            origin: Point::ORIGIN,
        }
    }

    /// The matrix as a CSS `transform` value.
    #[must_use]
    pub fn to_css(&self) -> alloc::string::String {
        self.matrix.to_css_transform()
    }
}
