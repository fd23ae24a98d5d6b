use std::fmt;

use serde::{Deserialize, Serialize};

use super::kernel::{contains, signed_area};
use super::Point;

/// Three vertices in construction order.
///
/// Equality ignores vertex order: two triangles are equal when they share the
/// same three vertices. The stored order is kept because the engine derives
/// child triangles and cut references from it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Triangle {
    pub v: [Point; 3],
}

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { v: [a, b, c] }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.v
    }

    /// Vertex `i` and the other two vertices in stored order.
    #[inline]
    pub fn apex(&self, i: usize) -> (Point, [Point; 2]) {
        let [a, b, c] = self.v;
        match i {
            0 => (a, [b, c]),
            1 => (b, [a, c]),
            _ => (c, [a, b]),
        }
    }

    /// Unsigned area.
    #[inline]
    pub fn area(&self) -> f64 {
        signed_area(self.v[0], self.v[1], self.v[2]).abs()
    }

    #[inline]
    pub fn centroid(&self) -> Point {
        (self.v[0] + self.v[1] + self.v[2]) / 3.0
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        contains(p, self.v[0], self.v[1], self.v[2])
    }

    /// Axis-aligned bounds as `(min, max)` corners.
    pub fn bounding_box(&self) -> (Point, Point) {
        let mut lo = self.v[0];
        let mut hi = self.v[0];
        for p in &self.v[1..] {
            lo = lo.inf(p);
            hi = hi.sup(p);
        }
        (lo, hi)
    }

    /// Integer lattice points covered by the triangle.
    ///
    /// Scans `floor(min) .. ceil(max)` (exclusive at the top) on both axes,
    /// x-major, and keeps the points that pass the closed containment test.
    /// This is what raster renderers fill.
    pub fn lattice_points(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let (lo, hi) = self.bounding_box();
        let (x0, x1) = (lo.x.floor() as i64, hi.x.ceil() as i64);
        let (y0, y1) = (lo.y.floor() as i64, hi.y.ceil() as i64);
        (x0..x1)
            .flat_map(move |x| (y0..y1).map(move |y| (x, y)))
            .filter(move |&(x, y)| self.contains(Point::new(x as f64, y as f64)))
    }

    /// Copy with every vertex multiplied by `factor`.
    #[inline]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            v: self.v.map(|p| p * factor),
        }
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        const PERMS: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        PERMS
            .iter()
            .any(|perm| (0..3).all(|k| self.v[k] == other.v[perm[k]]))
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.v;
        write!(
            f,
            "[({}, {}), ({}, {}), ({}, {})]",
            a.x, a.y, b.x, b.y, c.x, c.y
        )
    }
}
