//! Curated surface for the CLI and experiments.
//!
//! Prefer these re-exports over reaching into submodules; internals move
//! more often than this list.

// Geometry kernel
pub use crate::geom::{
    contains, distance, dot, is_degenerate, midpoint, pt, signed_area, signed_side, Point,
    Triangle,
};
// Colours and samples
pub use crate::color::{mean as mean_color, variance as color_variance, Color};
pub use crate::sample::{Corners, SampleGrid, SampledPoint};
// Partition oracle
pub use crate::partition::{split, split_by_ref, Cut};
// Subdivision and the root triangulator
pub use crate::root::{
    root_triangles, split_roots, triangulate, triangulate_tree, Mosaic, MosaicTree,
};
pub use crate::subdivide::{
    subdivide, subdivide_tree, Leaf, LeafKind, MosaicCfg, Node, SubdivisionStats, Tile,
};
