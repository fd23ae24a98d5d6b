//! Adaptive triangular subdivision of sampled images.
//!
//! The library approximates a raster with flat-coloured triangles: two root
//! triangles tile the sampled rectangle, and each triangle is split in two
//! until the colour variance of the samples it owns drops below a threshold.
//!
//! Layout
//! - `geom`: points, exact predicates, `Triangle`.
//! - `color`: `Color` plus mean/variance statistics.
//! - `sample`: `SampledPoint` and the `SampleGrid` produced by image sampling.
//! - `partition`: the half-plane split used by every cut.
//! - `subdivide`: configuration, the recursive engine, and its tree/leaf types.
//! - `root`: the two-triangle root split and the top-level `triangulate`.
//!
//! Decoding images and rendering the result live in the `trimosaic-cli` crate.

pub mod api;
pub mod color;
pub mod error;
pub mod geom;
pub mod partition;
pub mod root;
pub mod sample;
pub mod subdivide;

pub use error::{MosaicError, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geom::{pt, Point, Triangle};
    pub use crate::root::{triangulate, triangulate_tree, Mosaic, MosaicTree};
    pub use crate::sample::{Corners, SampleGrid, SampledPoint};
    pub use crate::subdivide::{LeafKind, MosaicCfg, Node, SubdivisionStats, Tile};
    pub use crate::{MosaicError, Result};
}
