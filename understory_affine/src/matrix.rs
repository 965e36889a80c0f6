// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point};

use crate::{BoundingBox, SingularMatrixError};

/// Determinants with an absolute value below this are treated as singular.
pub const SINGULARITY_EPSILON: f64 = 1e-10;

/// Default tolerance for [`AffineMatrix::is_identity`].
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// A 2D affine transform stored as six coefficients.
///
/// The linear part is `[[a, c], [b, d]]` and the translation is `(e, f)`:
///
/// ```text
/// x' = a·x + c·y + e
/// y' = b·x + d·y + f
/// ```
///
/// `AffineMatrix` is a plain `Copy` value; every operation returns a new
/// matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineMatrix {
    /// Horizontal scale / x contribution to x'.
    pub a: f64,
    /// x contribution to y'.
    pub b: f64,
    /// y contribution to x'.
    pub c: f64,
    /// Vertical scale / y contribution to y'.
    pub d: f64,
    /// Horizontal translation.
    pub e: f64,
    /// Vertical translation.
    pub f: f64,
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineMatrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Creates a matrix from its six coefficients.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Returns the identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// A pure translation by `(x, y)`.
    #[must_use]
    pub const fn translation(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// A uniform scale about the origin.
    #[must_use]
    pub const fn scale(s: f64) -> Self {
        Self::scale_non_uniform(s, s)
    }

    /// A non‑uniform scale about the origin.
    ///
    /// No validation is done: a zero factor produces a singular matrix that
    /// [`invert`](Self::invert) will later reject.
    #[must_use]
    pub const fn scale_non_uniform(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// A rotation by `angle` radians about the origin.
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// A rotation by `angle` radians about the point `(cx, cy)`.
    #[must_use]
    pub fn rotation_around_point(angle: f64, cx: f64, cy: f64) -> Self {
        Self::translation(-cx, -cy)
            .multiply(&Self::rotation(angle))
            .multiply(&Self::translation(cx, cy))
    }

    /// Composes two transforms: the result applies `self` first, then `other`.
    ///
    /// The coefficients are computed as
    ///
    /// ```text
    /// a = m1.a·m2.a + m1.b·m2.c      b = m1.a·m2.b + m1.b·m2.d
    /// c = m1.c·m2.a + m1.d·m2.c      d = m1.c·m2.b + m1.d·m2.d
    /// e = m1.e·m2.a + m1.f·m2.c + m2.e
    /// f = m1.e·m2.b + m1.f·m2.d + m2.f
    /// ```
    ///
    /// with `m1 = self` and `m2 = other`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let m1 = self;
        let m2 = other;
        Self {
            a: m1.a * m2.a + m1.b * m2.c,
            b: m1.a * m2.b + m1.b * m2.d,
            c: m1.c * m2.a + m1.d * m2.c,
            d: m1.c * m2.b + m1.d * m2.d,
            e: m1.e * m2.a + m1.f * m2.c + m2.e,
            f: m1.e * m2.b + m1.f * m2.d + m2.f,
        }
    }

    /// Determinant of the linear part, `a·d − b·c`.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Returns the inverse transform.
    ///
    /// # Errors
    ///
    /// Returns [`SingularMatrixError`] when `|determinant| <`
    /// [`SINGULARITY_EPSILON`]. A NaN determinant is not rejected; the
    /// inverse then has NaN coefficients.
    pub fn invert(&self) -> Result<Self, SingularMatrixError> {
        let det = self.determinant();
        if det.abs() < SINGULARITY_EPSILON {
            return Err(SingularMatrixError { determinant: det });
        }
        let Self { a, b, c, d, e, f } = *self;
        Ok(Self {
            a: d / det,
            b: -b / det,
            c: -c / det,
            d: a / det,
            e: (c * f - d * e) / det,
            f: (b * e - a * f) / det,
        })
    }

    /// Applies the transform to a point.
    #[must_use]
    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Applies the transform to each point, preserving order.
    #[must_use]
    pub fn transform_points(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.transform_point(p)).collect()
    }

    /// Transforms the four corners of `bbox` and returns their axis‑aligned
    /// bounding box.
    ///
    /// Under rotation or skew the result is larger than the transformed box.
    #[must_use]
    pub fn transform_bounding_box(&self, bbox: &BoundingBox) -> BoundingBox {
        let [q0, q1, q2, q3] = bbox.corners().map(|p| self.transform_point(p));
        let min_x = q0.x.min(q1.x).min(q2.x).min(q3.x);
        let min_y = q0.y.min(q1.y).min(q2.y).min(q3.y);
        let max_x = q0.x.max(q1.x).max(q2.x).max(q3.x);
        let max_y = q0.y.max(q1.y).max(q2.y).max(q3.y);
        BoundingBox::new(min_x, min_y, max_x, max_y)
    }

    /// Returns `true` if every coefficient is within `tolerance` of the
    /// identity. See [`DEFAULT_TOLERANCE`].
    #[must_use]
    pub fn is_identity(&self, tolerance: f64) -> bool {
        let id = Self::IDENTITY;
        (self.a - id.a).abs() <= tolerance
            && (self.b - id.b).abs() <= tolerance
            && (self.c - id.c).abs() <= tolerance
            && (self.d - id.d).abs() <= tolerance
            && (self.e - id.e).abs() <= tolerance
            && (self.f - id.f).abs() <= tolerance
    }

    /// Linearly interpolates each coefficient from `from` to `to`.
    ///
    /// `t` is clamped to `[0, 1]`. This is not rotation‑aware: midway between
    /// two rotations the result is generally scaled and sheared.
    #[must_use]
    pub fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        let t = if t < 0.0 {
            0.0
        } else if t > 1.0 {
            1.0
        } else {
            t
        };
        // Weighted form so that t = 0 and t = 1 reproduce the endpoints exactly.
        let lerp = |x: f64, y: f64| x * (1.0 - t) + y * t;
        Self {
            a: lerp(from.a, to.a),
            b: lerp(from.b, to.b),
            c: lerp(from.c, to.c),
            d: lerp(from.d, to.d),
            e: lerp(from.e, to.e),
            f: lerp(from.f, to.f),
        }
    }

    /// Formats as a CSS `transform` value: `matrix(a, b, c, d, e, f)`.
    #[must_use]
    pub fn to_css_transform(&self) -> String {
        format!(
            "matrix({}, {}, {}, {}, {}, {})",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }

    /// Formats as an SVG `transform` attribute: `matrix(a b c d e f)`.
    #[must_use]
    pub fn to_svg_transform(&self) -> String {
        format!(
            "matrix({} {} {} {} {} {})",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }

    /// The coefficients as `[a, b, c, d, e, f]`.
    #[must_use]
    pub const fn as_coeffs(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

impl From<Affine> for AffineMatrix {
    fn from(affine: Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self { a, b, c, d, e, f }
    }
}

impl From<AffineMatrix> for Affine {
    fn from(m: AffineMatrix) -> Self {
        Self::new(m.as_coeffs())
    }
}
