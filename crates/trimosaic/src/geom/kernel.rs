use std::cmp::Ordering;

use super::Point;

#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    (a + b) / 2.0
}

/// Dot product of two displacement vectors.
#[inline]
pub fn dot(v1: Point, v2: Point) -> f64 {
    v1.dot(&v2)
}

/// Sign of `(end - start) × (p - start)`.
///
/// `Greater` and `Less` name the two open half-planes of the line through
/// `start` and `end`; `Equal` means `p` lies exactly on it.
#[inline]
pub fn signed_side(p: Point, start: Point, end: Point) -> Ordering {
    let line = end - start;
    let v = p - start;
    let cross = line.x * v.y - line.y * v.x;
    cross.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

/// Signed area of triangle `abc` (half the cross product of its edges).
#[inline]
pub fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)) / 2.0
}

/// True when `abc` has zero area, i.e. the barycentric system is singular.
#[inline]
pub fn is_degenerate(a: Point, b: Point, c: Point) -> bool {
    barycentric_denom(b - a, c - a) == 0.0
}

#[inline]
fn barycentric_denom(ab: Point, ac: Point) -> f64 {
    let dot_bb = dot(ab, ab);
    let dot_cc = dot(ac, ac);
    let dot_cb = dot(ac, ab);
    dot_bb * dot_cc - dot_cb * dot_cb
}

/// Closed containment test for triangle `abc` via barycentric coordinates.
///
/// Solves `p = a + u·(c − a) + v·(b − a)` and accepts `u ≥ 0, v ≥ 0, u + v ≤ 1`.
/// Degenerate triangles contain nothing.
///
/// The denominator `|ab|²·|ac|² − (ab·ac)²` is non-negative, so the
/// comparisons run on `u·denom` and `v·denom` and stay exact for integer input.
pub fn contains(p: Point, a: Point, b: Point, c: Point) -> bool {
    let ap = p - a;
    let ab = b - a;
    let ac = c - a;

    let dot_cc = dot(ac, ac);
    let dot_cb = dot(ac, ab);
    let dot_bb = dot(ab, ab);
    let dot_cp = dot(ac, ap);
    let dot_bp = dot(ab, ap);

    let denom = barycentric_denom(ab, ac);
    if denom <= 0.0 {
        return false;
    }
    let u = dot_bb * dot_cp - dot_cb * dot_bp;
    let v = dot_cc * dot_bp - dot_cb * dot_cp;
    u >= 0.0 && v >= 0.0 && u + v <= denom
}
