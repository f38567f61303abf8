//! Lightweight 3D point and point sequence types used by curve implementations.

use std::{ops::Deref, slice, vec, vec::Vec};

/// A position in 3D space. Equality is plain value equality.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// Create a new point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Multiply every coordinate by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Coordinates as an `[x, y, z]` array.
    pub const fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// True when all three coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        p.as_array()
    }
}

/// Axis-aligned bounding box of a set of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Component-wise minimum.
    pub min: Point3,
    /// Component-wise maximum.
    pub max: Point3,
}

impl Bounds {
    /// Bounds containing exactly one point.
    pub const fn from_point(p: Point3) -> Self {
        Self { min: p, max: p }
    }

    /// Grow the bounds to include `p`.
    pub fn include(&mut self, p: Point3) {
        let (lo, hi) = (self.min, self.max);
        self.min = Point3::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z));
        self.max = Point3::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z));
    }

    /// Extent along each axis.
    pub fn size(&self) -> Point3 {
        Point3::new(
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        )
    }
}

/// An ordered, fully materialized sequence of points.
///
/// Index order is the traversal order of the curve; consumers draw it as a
/// connected path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSequence(Vec<Point3>);

impl PointSequence {
    /// Wrap an existing vector of points.
    pub fn new(points: Vec<Point3>) -> Self {
        Self(points)
    }

    /// Return the points as a slice.
    pub fn as_slice(&self) -> &[Point3] {
        &self.0
    }

    /// Unwrap into the backing vector.
    pub fn into_vec(self) -> Vec<Point3> {
        self.0
    }

    /// Bounding box of all points, or `None` for an empty sequence.
    pub fn bounds(&self) -> Option<Bounds> {
        let (first, rest) = self.0.split_first()?;
        let mut bounds = Bounds::from_point(*first);
        for p in rest {
            bounds.include(*p);
        }
        Some(bounds)
    }
}

impl Deref for PointSequence {
    type Target = [Point3];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Point3>> for PointSequence {
    fn from(points: Vec<Point3>) -> Self {
        Self(points)
    }
}

impl From<PointSequence> for Vec<Point3> {
    fn from(val: PointSequence) -> Self {
        val.0
    }
}

impl FromIterator<Point3> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for PointSequence {
    type Item = Point3;
    type IntoIter = vec::IntoIter<Point3>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point3;
    type IntoIter = slice::Iter<'a, Point3>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
