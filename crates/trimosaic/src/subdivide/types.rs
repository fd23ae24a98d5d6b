//! Configuration, tree nodes, and run statistics for the subdivision engine.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{MosaicError, Result};
use crate::geom::Triangle;
use crate::sample::SampledPoint;

/// Subdivision configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MosaicCfg {
    /// Minimum colour variance that is still split. Lower values give finer meshes.
    pub threshold: f64,
    /// A candidate cut is forced once `base² / (2·samples)` exceeds this.
    pub max_width_to_height: f64,
    /// Recursion guard; exceeding it aborts the run.
    pub max_depth: usize,
    /// Colour of triangles that own no samples.
    pub background: Color,
    /// Evaluate the two root triangles on the rayon pool.
    pub parallel: bool,
}

impl Default for MosaicCfg {
    fn default() -> Self {
        Self {
            threshold: 500.0,
            max_width_to_height: 3.0,
            max_depth: 2048,
            background: Color::WHITE,
            parallel: false,
        }
    }
}

impl MosaicCfg {
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(MosaicError::invalid(format!(
                "threshold must be positive and finite, got {}",
                self.threshold
            )));
        }
        if !(self.max_width_to_height.is_finite() && self.max_width_to_height > 0.0) {
            return Err(MosaicError::invalid(format!(
                "max_width_to_height must be positive and finite, got {}",
                self.max_width_to_height
            )));
        }
        if self.max_depth == 0 {
            return Err(MosaicError::invalid("max_depth must be at least 1"));
        }
        Ok(())
    }
}

/// Why a triangle stopped splitting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeafKind {
    /// Colour variance fell below the threshold.
    Uniform,
    /// No samples; painted with the background colour.
    Empty,
    /// Above threshold, but every candidate cut left one side empty.
    SafetyValve,
}

/// Terminal node: one flat-coloured triangle and the samples it owns.
#[derive(Clone, Debug)]
pub struct Leaf {
    pub triangle: Triangle,
    pub color: Color,
    pub kind: LeafKind,
    pub samples: Vec<SampledPoint>,
}

/// Node of the subdivision tree.
#[derive(Clone, Debug)]
pub enum Node {
    Leaf(Leaf),
    Split {
        triangle: Triangle,
        children: Box<[Node; 2]>,
    },
}

impl Node {
    pub fn triangle(&self) -> &Triangle {
        match self {
            Node::Leaf(leaf) => &leaf.triangle,
            Node::Split { triangle, .. } => triangle,
        }
    }

    /// Leaves in depth-first, first-child-first order.
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf(leaf) => out.push(leaf),
                Node::Split { children, .. } => {
                    stack.push(&children[1]);
                    stack.push(&children[0]);
                }
            }
        }
        out
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Split { children, .. } => {
                1 + children[0].depth().max(children[1].depth())
            }
        }
    }

    /// Flatten into output tiles, dropping the owned samples.
    pub fn into_tiles(self) -> Vec<Tile> {
        self.leaves().into_iter().map(Tile::from).collect()
    }
}

/// One element of a mosaic: a triangle and its flat colour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub triangle: Triangle,
    pub color: Color,
}

impl From<&Leaf> for Tile {
    fn from(leaf: &Leaf) -> Self {
        Self {
            triangle: leaf.triangle,
            color: leaf.color,
        }
    }
}

/// Counters collected during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdivisionStats {
    pub uniform_leaves: usize,
    pub empty_leaves: usize,
    pub safety_valve_leaves: usize,
    pub splits: usize,
    /// Splits taken by the aspect-ratio override rather than by variance.
    pub forced_splits: usize,
    pub max_depth: usize,
}

impl SubdivisionStats {
    #[inline]
    pub fn leaves(&self) -> usize {
        self.uniform_leaves + self.empty_leaves + self.safety_valve_leaves
    }

    pub(crate) fn record_leaf(&mut self, kind: LeafKind, depth: usize) {
        match kind {
            LeafKind::Uniform => self.uniform_leaves += 1,
            LeafKind::Empty => self.empty_leaves += 1,
            LeafKind::SafetyValve => self.safety_valve_leaves += 1,
        }
        self.max_depth = self.max_depth.max(depth);
    }

    /// Combine counters from independent subtrees.
    pub fn merge(&mut self, other: &SubdivisionStats) {
        self.uniform_leaves += other.uniform_leaves;
        self.empty_leaves += other.empty_leaves;
        self.safety_valve_leaves += other.safety_valve_leaves;
        self.splits += other.splits;
        self.forced_splits += other.forced_splits;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}
