//! Half-plane partition of a sample set along a cut line.
//!
//! Every split in the engine (and the root diagonal) goes through `split`.
//! The cut runs from `pivot` to `tip`; `reference` picks which half is
//! returned first. Points exactly on the line always land in the second,
//! non-reference half, so the two outputs are disjoint and together hold every
//! input point exactly once.

use std::cmp::Ordering;

use crate::geom::{signed_side, Point};
use crate::sample::SampledPoint;

/// A cut line `pivot → tip` together with the side that counts as "near".
///
/// A point is near iff it lies strictly on the same side as `reference`;
/// on-line points are never near. If `reference` itself is on the line, the
/// strictly positive side (counter-clockwise of `pivot → tip` in a y-up frame)
/// plays its role.
#[derive(Clone, Copy, Debug)]
pub struct Cut {
    pub pivot: Point,
    pub tip: Point,
    near: Ordering,
}

impl Cut {
    pub fn new(pivot: Point, tip: Point, reference: Point) -> Self {
        let near = match signed_side(reference, pivot, tip) {
            Ordering::Equal => Ordering::Greater,
            side => side,
        };
        Self { pivot, tip, near }
    }

    #[inline]
    pub fn is_near(&self, p: Point) -> bool {
        signed_side(p, self.pivot, self.tip) == self.near
    }

    /// Consume `points` into `(near, far)`, preserving relative order.
    pub fn apply(&self, points: Vec<SampledPoint>) -> (Vec<SampledPoint>, Vec<SampledPoint>) {
        points.into_iter().partition(|s| self.is_near(s.p))
    }
}

/// Split `points` by the line `pivot → tip`.
///
/// Returns `(with_reference, other)` as described on [`Cut`].
pub fn split(
    points: Vec<SampledPoint>,
    pivot: Point,
    tip: Point,
    reference: Point,
) -> (Vec<SampledPoint>, Vec<SampledPoint>) {
    Cut::new(pivot, tip, reference).apply(points)
}

/// Borrowing variant of [`split`]; clones the samples.
pub fn split_by_ref(
    points: &[SampledPoint],
    pivot: Point,
    tip: Point,
    reference: Point,
) -> (Vec<SampledPoint>, Vec<SampledPoint>) {
    split(points.to_vec(), pivot, tip, reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::geom::pt;
    use proptest::prelude::*;

    fn sp(x: u32, y: u32) -> SampledPoint {
        SampledPoint::new(x, y, Color::BLACK)
    }

    fn locs(v: &[SampledPoint]) -> Vec<(f64, f64)> {
        v.iter().map(|s| (s.p.x, s.p.y)).collect()
    }

    #[test]
    fn square_diagonal_scenario() {
        let pts = vec![sp(0, 0), sp(2, 0), sp(0, 2), sp(2, 2)];
        let (with_ref, other) = split(pts, pt(0.0, 0.0), pt(2.0, 2.0), pt(2.0, 0.0));
        assert_eq!(locs(&with_ref), vec![(2.0, 0.0)]);
        assert_eq!(locs(&other), vec![(0.0, 0.0), (0.0, 2.0), (2.0, 2.0)]);
    }

    #[test]
    fn on_line_points_avoid_reference_half_on_either_side() {
        let pts = vec![sp(0, 0), sp(2, 0), sp(0, 2), sp(1, 1)];
        // Reference on the positive side this time.
        let (with_ref, other) = split(pts, pt(0.0, 0.0), pt(2.0, 2.0), pt(0.0, 2.0));
        assert_eq!(locs(&with_ref), vec![(0.0, 2.0)]);
        assert_eq!(locs(&other), vec![(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)]);
    }

    #[test]
    fn reference_on_line_uses_positive_side() {
        let pts = vec![sp(0, 0), sp(2, 0), sp(0, 2)];
        let (with_ref, other) = split(pts, pt(0.0, 0.0), pt(2.0, 2.0), pt(3.0, 3.0));
        assert_eq!(locs(&with_ref), vec![(0.0, 2.0)]);
        assert_eq!(locs(&other), vec![(0.0, 0.0), (2.0, 0.0)]);
    }

    #[test]
    fn split_is_deterministic() {
        let pts: Vec<_> = (0..5).flat_map(|x| (0..5).map(move |y| sp(x, y))).collect();
        let a = split_by_ref(&pts, pt(0.0, 0.0), pt(4.0, 2.5), pt(4.0, 0.0));
        let b = split_by_ref(&pts, pt(0.0, 0.0), pt(4.0, 2.5), pt(4.0, 0.0));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn split_partitions_input(
            raw in prop::collection::vec((0u32..40, 0u32..40), 0..80),
            px in 0u32..40, py in 0u32..40,
            tx in 0u32..80, ty in 0u32..80,
            rx in 0u32..40, ry in 0u32..40,
        ) {
            let pts: Vec<_> = raw.iter().map(|&(x, y)| sp(x, y)).collect();
            let pivot = pt(px as f64, py as f64);
            let tip = pt(tx as f64 / 2.0, ty as f64 / 2.0);
            let reference = pt(rx as f64, ry as f64);
            let (a, b) = split_by_ref(&pts, pivot, tip, reference);
            prop_assert_eq!(a.len() + b.len(), pts.len());

            // Same multiset of locations.
            let mut merged = locs(&a);
            merged.extend(locs(&b));
            let mut expected = locs(&pts);
            let key = |p: &(f64, f64)| (p.0 as i64, p.1 as i64);
            merged.sort_by_key(key);
            expected.sort_by_key(key);
            prop_assert_eq!(merged, expected);

            for s in &a {
                prop_assert_ne!(signed_side(s.p, pivot, tip), Ordering::Equal);
            }
        }
    }
}
