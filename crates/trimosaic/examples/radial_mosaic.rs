//! Triangulate a synthetic radial gradient and print a short summary.
//!
//! Purpose
//! - Give a reproducible, image-free data point for how tile counts react to
//!   the split threshold.
//!
//! Run with `cargo run -p trimosaic --example radial_mosaic --release`.

use std::time::Instant;

use trimosaic::api::{triangulate, Color, MosaicCfg, SampleGrid};

fn radial(side: u32) -> SampleGrid {
    let c = side as f64 / 2.0;
    SampleGrid::from_fn(side, side, |x, y| {
        let r = ((x as f64 - c).powi(2) + (y as f64 - c).powi(2)).sqrt() / c;
        let t = r.min(1.0);
        Color([255.0 * (1.0 - t), 80.0 + 100.0 * t, 255.0 * t])
    })
}

fn main() {
    let side = 200;
    for threshold in [50.0, 200.0, 500.0, 2000.0] {
        let cfg = MosaicCfg {
            threshold,
            ..MosaicCfg::default()
        };
        let start = Instant::now();
        let mosaic = triangulate(radial(side), &cfg).expect("valid configuration");
        let ms = start.elapsed().as_secs_f64() * 1e3;
        println!(
            "threshold={threshold:>6} tiles={:>6} forced={:>5} safety_valve={:>3} depth={:>3} time_ms={ms:.2}",
            mosaic.tiles.len(),
            mosaic.stats.forced_splits,
            mosaic.stats.safety_valve_leaves,
            mosaic.stats.max_depth,
        );
    }
}
