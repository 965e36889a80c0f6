// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Axis‑aligned bounding box.
///
/// The extents are stored alongside their derived `width` and `height`. All
/// constructors recompute both together, so `width == max_x - min_x` and
/// `height == max_y - min_y` always hold; there is no way to set one without
/// the other.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Extents", into = "Extents"))]
pub struct BoundingBox {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    width: f64,
    height: f64,
}

impl BoundingBox {
    /// Creates a box from its minimum and maximum corners.
    ///
    /// The arguments are taken as given; callers passing `max < min` get a box
    /// with a negative width or height.
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Returns the smallest box containing all `points`, or `None` if the
    /// iterator is empty.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, max_x, max_y))
    }

    /// Minimum x coordinate.
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Minimum y coordinate.
    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Maximum x coordinate.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Maximum y coordinate.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Width, `max_x - min_x`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height, `max_y - min_y`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The minimum corner.
    #[must_use]
    pub fn min(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// The maximum corner.
    #[must_use]
    pub fn max(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// The center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width / 2.0,
            self.min_y + self.height / 2.0,
        )
    }

    /// The four corners, clockwise from the minimum corner (in a y‑down space).
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }

    /// Returns `true` if `pt` lies inside the box or on its edge.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.min_x && pt.x <= self.max_x && pt.y >= self.min_y && pt.y <= self.max_y
    }

    /// Returns the smallest box containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        Self::new(rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y())
    }
}

impl From<BoundingBox> for Rect {
    fn from(bbox: BoundingBox) -> Self {
        Self::new(bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y)
    }
}

/// Serialized form of a [`BoundingBox`]; the derived sizes are recomputed on load.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Extents {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

#[cfg(feature = "serde")]
impl From<Extents> for BoundingBox {
    fn from(e: Extents) -> Self {
        Self::new(e.min_x, e.min_y, e.max_x, e.max_y)
    }
}

#[cfg(feature = "serde")]
impl From<BoundingBox> for Extents {
    fn from(b: BoundingBox) -> Self {
        Self {
            min_x: b.min_x,
            min_y: b.min_y,
            max_x: b.max_x,
            max_y: b.max_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::BoundingBox;

    #[test]
    fn sizes_follow_extents() {
        let b = BoundingBox::new(-5.0, 2.0, 15.0, 12.0);
        assert_eq!(b.width(), 20.0);
        assert_eq!(b.height(), 10.0);
        assert_eq!(b.center(), Point::new(5.0, 7.0));
    }

    #[test]
    fn from_points_covers_all_inputs() {
        let b = BoundingBox::from_points([
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(b, BoundingBox::new(-2.0, -1.0, 3.0, 4.0));
        assert!(BoundingBox::from_points([] as [Point; 0]).is_none());
    }

    #[test]
    fn contains_includes_edges() {
        let b = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(b.contains(Point::new(10.0, 0.0)));
        assert!(b.contains(Point::new(5.0, 5.0)));
        assert!(!b.contains(Point::new(10.1, 5.0)));
    }

    #[test]
    fn union_and_rect_interop() {
        let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let b = BoundingBox::from(Rect::new(2.0, -1.0, 3.0, 0.5));
        let u = a.union(&b);
        assert_eq!(Rect::from(u), Rect::new(0.0, -1.0, 3.0, 1.0));
        assert_eq!(u.width(), 3.0);
        assert_eq!(u.height(), 2.0);
    }
}
