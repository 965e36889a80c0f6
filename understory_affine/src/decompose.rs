// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::AffineMatrix;

/// Translation, scale, rotation and skew read back out of a matrix.
///
/// Produced by [`AffineMatrix::decompose`]. `skew.y` is always zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decomposition {
    /// The `(e, f)` translation.
    pub translation: Vec2,
    /// Column lengths of the linear part.
    pub scale: Vec2,
    /// Rotation in radians, `atan2(b, a)`.
    pub rotation: f64,
    /// Skew angles in radians.
    pub skew: Vec2,
}

/// Inputs for [`AffineMatrix::compose`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Components {
    /// Translation, default `(0, 0)`.
    pub translation: Vec2,
    /// Per-axis scale, default `(1, 1)`.
    pub scale: Vec2,
    /// Rotation in radians, default `0`.
    pub rotation: f64,
    /// Origin for the scale and rotation stages, default `(0, 0)`.
    pub origin: Point,
}

impl Default for Components {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: Vec2::new(1.0, 1.0),
            rotation: 0.0,
            origin: Point::ORIGIN,
        }
    }
}

impl AffineMatrix {
    /// Splits the matrix into translation, scale, rotation and skew.
    ///
    /// ```text
    /// scale.x  = √(a² + b²)
    /// scale.y  = √(c² + d²)
    /// rotation = atan2(b, a)
    /// skew.x   = atan2(a·c + b·d, scale.x²)
    /// skew.y   = 0
    /// ```
    ///
    /// This is only meaningful for matrices built from translation, rotation
    /// and (possibly non‑uniform) scale. It is not an inverse of
    /// [`compose`](Self::compose) for arbitrary input and will not recover
    /// general skew.
    #[must_use]
    pub fn decompose(&self) -> Decomposition {
        let Self { a, b, c, d, e, f } = *self;
        let scale_x = (a * a + b * b).sqrt();
        let scale_y = (c * c + d * d).sqrt();
        Decomposition {
            translation: Vec2::new(e, f),
            scale: Vec2::new(scale_x, scale_y),
            rotation: b.atan2(a),
            skew: Vec2::new((a * c + b * d).atan2(scale_x * scale_x), 0.0),
        }
    }

    /// Builds a matrix from [`Components`].
    ///
    /// Starting from a translation by `-origin`, each stage is folded in with
    /// `stage.multiply(&result)` in this order: scale, rotation, translation
    /// by `origin`, then `translation`.
    #[must_use]
    pub fn compose(components: &Components) -> Self {
        let Components {
            translation,
            scale,
            rotation,
            origin,
        } = *components;

        let translate_to_origin = Self::translation(-origin.x, -origin.y);
        let scale_matrix = Self::scale_non_uniform(scale.x, scale.y);
        let rotate_matrix = Self::rotation(rotation);
        let translate_from_origin = Self::translation(origin.x, origin.y);
        let translation_matrix = Self::translation(translation.x, translation.y);

        let mut result = translate_to_origin;
        result = scale_matrix.multiply(&result);
        result = rotate_matrix.multiply(&result);
        result = translate_from_origin.multiply(&result);
        translation_matrix.multiply(&result)
    }
}
