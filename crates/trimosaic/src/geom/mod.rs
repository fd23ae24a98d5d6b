//! Geometry kernel for the subdivision engine.
//!
//! Purpose
//! - Point arithmetic and the two exact predicates the engine relies on: the
//!   half-plane sign test used by every cut and the barycentric containment
//!   test used by rasterizers.
//! - `Triangle`, the node type of the subdivision tree.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` in image coordinates (x right, y down).
//! - Sample locations are integers and cut points are midpoints of integer or
//!   previously halved coordinates, so sign tests are exact in `f64` at
//!   working resolutions; no epsilon is applied.

mod kernel;
mod triangle;

pub use kernel::{contains, distance, dot, is_degenerate, midpoint, pt, signed_area, signed_side};
pub use triangle::Triangle;

/// A point (or displacement) in the image plane.
pub type Point = nalgebra::Vector2<f64>;

#[cfg(test)]
mod tests;
