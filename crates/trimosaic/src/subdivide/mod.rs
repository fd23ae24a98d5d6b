//! Adaptive subdivision engine.
//!
//! Each triangle is either a leaf (its samples are similar enough, it owns
//! none, or no cut can separate them) or is split along one of its three
//! apex-to-midpoint lines into two children that take ownership of the
//! samples on their side. Recursion is depth-first, first child first, so the
//! leaf order of a run is stable.
//!
//! Choosing a cut
//! - Only cuts that leave samples on both sides are viable.
//! - A viable cut whose opposite edge is long relative to the sample count
//!   (`base² / (2·samples) > max_width_to_height`) is taken immediately; for
//!   unit sample density this ratio approximates base over height.
//! - Otherwise the cut with the smallest summed child variance wins, later
//!   apexes winning ties.

mod engine;
mod types;

pub(crate) use engine::Subdivider;
pub use engine::{subdivide, subdivide_tree};
pub use types::{Leaf, LeafKind, MosaicCfg, Node, SubdivisionStats, Tile};
