//! Recursive, depth-first subdivision of one triangle.

use crate::color::{mean, variance};
use crate::error::{MosaicError, Result};
use crate::geom::{distance, midpoint, Triangle};
use crate::partition::Cut;
use crate::sample::SampledPoint;

use super::types::{Leaf, LeafKind, MosaicCfg, Node, SubdivisionStats, Tile};

/// Subdivide `triangle` and return its leaves as tiles, first child first.
pub fn subdivide(
    triangle: Triangle,
    samples: Vec<SampledPoint>,
    cfg: &MosaicCfg,
) -> Result<Vec<Tile>> {
    let (node, _) = subdivide_tree(triangle, samples, cfg)?;
    Ok(node.into_tiles())
}

/// Subdivide `triangle` and keep the full tree plus run statistics.
pub fn subdivide_tree(
    triangle: Triangle,
    samples: Vec<SampledPoint>,
    cfg: &MosaicCfg,
) -> Result<(Node, SubdivisionStats)> {
    cfg.validate()?;
    let mut runner = Subdivider::new(cfg);
    let node = runner.node(triangle, samples, 0)?;
    Ok((node, runner.stats))
}

/// Chosen cut for one triangle.
struct Candidate {
    apex: usize,
    cut: Cut,
    forced: bool,
}

/// Recursion context carrying configuration and counters.
pub(crate) struct Subdivider<'a> {
    cfg: &'a MosaicCfg,
    pub(crate) stats: SubdivisionStats,
}

impl<'a> Subdivider<'a> {
    pub(crate) fn new(cfg: &'a MosaicCfg) -> Self {
        Self {
            cfg,
            stats: SubdivisionStats::default(),
        }
    }

    pub(crate) fn node(
        &mut self,
        triangle: Triangle,
        samples: Vec<SampledPoint>,
        depth: usize,
    ) -> Result<Node> {
        if depth > self.cfg.max_depth {
            return Err(MosaicError::DepthExceeded {
                max_depth: self.cfg.max_depth,
                triangle,
                samples: samples.len(),
            });
        }

        let Some(var) = variance(samples.iter().map(|s| s.color)) else {
            return Ok(self.leaf(triangle, samples, LeafKind::Empty, depth));
        };
        if var < self.cfg.threshold {
            return Ok(self.leaf(triangle, samples, LeafKind::Uniform, depth));
        }

        let Some(best) = self.best_cut(&triangle, &samples) else {
            tracing::debug!(
                triangle = %triangle,
                samples = samples.len(),
                variance = var,
                "no viable cut; keeping triangle as a leaf"
            );
            return Ok(self.leaf(triangle, samples, LeafKind::SafetyValve, depth));
        };

        self.stats.splits += 1;
        if best.forced {
            self.stats.forced_splits += 1;
        }
        let (apex, [o1, o2]) = triangle.apex(best.apex);
        let mid = best.cut.tip;
        let (near, far) = best.cut.apply(samples);
        let first = self.node(Triangle::new(mid, apex, o1), near, depth + 1)?;
        let second = self.node(Triangle::new(mid, apex, o2), far, depth + 1)?;
        Ok(Node::Split {
            triangle,
            children: Box::new([first, second]),
        })
    }

    /// Evaluate the three apex-to-midpoint cuts.
    ///
    /// A cut is viable only if both halves own samples. The first viable cut
    /// whose base is too long for the sample count wins outright; otherwise
    /// the smallest summed variance wins, later apexes taking ties.
    fn best_cut(&self, triangle: &Triangle, samples: &[SampledPoint]) -> Option<Candidate> {
        let n = samples.len() as f64;
        let mut best: Option<Candidate> = None;
        let mut best_var = f64::INFINITY;
        for i in 0..3 {
            let (apex, [o1, o2]) = triangle.apex(i);
            let cut = Cut::new(apex, midpoint(o1, o2), o1);
            let near = samples.iter().filter(|s| cut.is_near(s.p)).map(|s| s.color);
            let far = samples.iter().filter(|s| !cut.is_near(s.p)).map(|s| s.color);
            let (Some(var1), Some(var2)) = (variance(near), variance(far)) else {
                continue;
            };

            let base = distance(o1, o2);
            if base * base / (2.0 * n) > self.cfg.max_width_to_height {
                return Some(Candidate {
                    apex: i,
                    cut,
                    forced: true,
                });
            }
            if var1 + var2 <= best_var {
                best_var = var1 + var2;
                best = Some(Candidate {
                    apex: i,
                    cut,
                    forced: false,
                });
            }
        }
        best
    }

    fn leaf(
        &mut self,
        triangle: Triangle,
        samples: Vec<SampledPoint>,
        kind: LeafKind,
        depth: usize,
    ) -> Node {
        self.stats.record_leaf(kind, depth);
        let color = mean(samples.iter().map(|s| s.color)).unwrap_or(self.cfg.background);
        Node::Leaf(Leaf {
            triangle,
            color,
            kind,
            samples,
        })
    }
}
