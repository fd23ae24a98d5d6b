//! Effective configuration: JSON file first, explicit flags on top.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use trimosaic::api::MosaicCfg;

/// Flag values that override the file (or the defaults) when present.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overrides {
    pub threshold: Option<f64>,
    pub max_width_to_height: Option<f64>,
    pub max_depth: Option<usize>,
    pub parallel: bool,
}

/// Read a JSON config; missing fields take their defaults.
pub fn read_cfg(path: &Path) -> Result<MosaicCfg> {
    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing config {}", path.display()))
}

/// Resolve and validate the configuration for one run.
pub fn resolve(path: Option<&Path>, o: Overrides) -> Result<MosaicCfg> {
    let mut cfg = match path {
        Some(p) => read_cfg(p)?,
        None => MosaicCfg::default(),
    };
    if let Some(t) = o.threshold {
        cfg.threshold = t;
    }
    if let Some(r) = o.max_width_to_height {
        cfg.max_width_to_height = r;
    }
    if let Some(d) = o.max_depth {
        cfg.max_depth = d;
    }
    cfg.parallel |= o.parallel;
    cfg.validate()?;
    Ok(cfg)
}
