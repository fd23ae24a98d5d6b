//! Root split of the sampled rectangle and the top-level entry points.
//!
//! The rectangle is cut along its top-left → bottom-right diagonal into two
//! triangles that tile it exactly. Samples are assigned with the same
//! partition rule the engine uses (on-diagonal samples go to the lower-left
//! triangle), then each root triangle is subdivided independently. The
//! upper-right triangle's leaves always come first in the output.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{MosaicError, Result};
use crate::geom::Triangle;
use crate::partition::split;
use crate::sample::{Corners, SampleGrid, SampledPoint};
use crate::subdivide::{MosaicCfg, Node, Subdivider, SubdivisionStats, Tile};

/// Both subdivision trees of a run.
#[derive(Clone, Debug)]
pub struct MosaicTree {
    /// Upper-right root first, lower-left root second.
    pub roots: [Node; 2],
    pub stats: SubdivisionStats,
}

impl MosaicTree {
    pub fn into_tiles(self) -> Vec<Tile> {
        let [first, second] = self.roots;
        let mut tiles = first.into_tiles();
        tiles.extend(second.into_tiles());
        tiles
    }
}

/// Final result: ordered tiles plus the size of the sampled rectangle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Mosaic {
    pub width: u32,
    pub height: u32,
    pub tiles: Vec<Tile>,
    pub stats: SubdivisionStats,
}

/// The two root triangles of a rectangle, upper-right first.
pub fn root_triangles(c: &Corners) -> [Triangle; 2] {
    [
        Triangle::new(c.bottom_right, c.top_left, c.top_right),
        Triangle::new(c.top_left, c.bottom_right, c.bottom_left),
    ]
}

/// Assign samples to the two root triangles, upper-right half first.
pub fn split_roots(
    c: &Corners,
    samples: Vec<SampledPoint>,
) -> (Vec<SampledPoint>, Vec<SampledPoint>) {
    split(samples, c.top_left, c.bottom_right, c.top_right)
}

/// Triangulate a sample grid, keeping both subdivision trees.
pub fn triangulate_tree(grid: SampleGrid, cfg: &MosaicCfg) -> Result<MosaicTree> {
    cfg.validate()?;
    if grid.is_empty() {
        return Err(MosaicError::EmptySamples);
    }
    let started = Instant::now();
    let corners = grid.corners();
    let [upper, lower] = root_triangles(&corners);
    let (upper_samples, lower_samples) = split_roots(&corners, grid.samples);
    tracing::debug!(
        upper = upper_samples.len(),
        lower = lower_samples.len(),
        "root split"
    );

    let run = |t: Triangle, s: Vec<SampledPoint>| -> Result<(Node, SubdivisionStats)> {
        let mut runner = Subdivider::new(cfg);
        let node = runner.node(t, s, 0)?;
        Ok((node, runner.stats))
    };
    let (first, second) = if cfg.parallel {
        rayon::join(|| run(upper, upper_samples), || run(lower, lower_samples))
    } else {
        (run(upper, upper_samples), run(lower, lower_samples))
    };
    let (first, mut stats) = first?;
    let (second, second_stats) = second?;
    stats.merge(&second_stats);

    tracing::info!(
        tiles = stats.leaves(),
        uniform = stats.uniform_leaves,
        empty = stats.empty_leaves,
        safety_valve = stats.safety_valve_leaves,
        forced_splits = stats.forced_splits,
        depth = stats.max_depth,
        elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
        "triangulated"
    );
    Ok(MosaicTree {
        roots: [first, second],
        stats,
    })
}

/// Triangulate a sample grid into ordered tiles.
pub fn triangulate(grid: SampleGrid, cfg: &MosaicCfg) -> Result<Mosaic> {
    let (width, height) = (grid.width, grid.height);
    let tree = triangulate_tree(grid, cfg)?;
    let stats = tree.stats;
    Ok(Mosaic {
        width,
        height,
        tiles: tree.into_tiles(),
        stats,
    })
}
