//! Output writers: SVG polygons, filled rasters, and raw JSON tiles.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use image::{Rgb, RgbImage};
use trimosaic::api::{Color, Mosaic};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Svg,
    Png,
    Jpg,
    Json,
}

impl Format {
    /// Guess from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        Ok(match ext.as_deref() {
            Some("svg") => Format::Svg,
            Some("png") => Format::Png,
            Some("jpg" | "jpeg") => Format::Jpg,
            Some("json") => Format::Json,
            _ => bail!(
                "cannot infer output format from {}; pass --format",
                path.display()
            ),
        })
    }
}

/// Helper that accumulates an SVG document.
struct SvgBuilder {
    content: String,
}

impl SvgBuilder {
    fn new(width: f64, height: f64, title: &str) -> Self {
        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{width}px" height="{height}px" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">
  <title>{}</title>
"#,
            escape(title)
        );
        Self { content }
    }

    /// Filled and stroked with the same colour so neighbouring tiles leave no hairline gaps.
    fn polygon(&mut self, points: &[(f64, f64)], color: Color) {
        let pts: Vec<String> = points.iter().map(|(x, y)| format!("{x:.3},{y:.3}")).collect();
        let css = color.css();
        // Writing into a String cannot fail.
        let _ = writeln!(
            self.content,
            r#"  <polygon points="{}" fill="{css}" stroke="{css}" />"#,
            pts.join(" ")
        );
    }

    fn finish(mut self) -> String {
        self.content.push_str("</svg>\n");
        self.content
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// One `<polygon>` per tile, coordinates multiplied by `scale`.
pub fn render_svg(mosaic: &Mosaic, scale: f64, title: &str) -> String {
    let mut svg = SvgBuilder::new(
        mosaic.width as f64 * scale,
        mosaic.height as f64 * scale,
        title,
    );
    for tile in &mosaic.tiles {
        let t = tile.triangle.scaled(scale);
        let pts = t.v.map(|p| (p.x, p.y));
        svg.polygon(&pts, tile.color);
    }
    svg.finish()
}

/// Fill every tile's lattice points on a `scale·(w, h)` canvas.
///
/// Tiles are painted in order, so pixels on shared edges take the colour of
/// the later tile.
pub fn render_raster(mosaic: &Mosaic, scale: f64, background: Color) -> RgbImage {
    let w = (mosaic.width as f64 * scale).ceil() as u32;
    let h = (mosaic.height as f64 * scale).ceil() as u32;
    let mut img = RgbImage::from_pixel(w, h, Rgb(background.to_rgb8()));
    for tile in &mosaic.tiles {
        let px = Rgb(tile.color.to_rgb8());
        let t = tile.triangle.scaled(scale);
        for (x, y) in t.lattice_points() {
            if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
                img.put_pixel(x as u32, y as u32, px);
            }
        }
    }
    img
}

/// Render `mosaic` in `format` and write it to `path`.
pub fn write_output(
    mosaic: &Mosaic,
    path: &Path,
    format: Format,
    scale: f64,
    title: &str,
    background: Color,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    match format {
        Format::Svg => fs::write(path, render_svg(mosaic, scale, title))
            .with_context(|| format!("writing {}", path.display()))?,
        Format::Png | Format::Jpg => {
            let fmt = if format == Format::Png {
                image::ImageFormat::Png
            } else {
                image::ImageFormat::Jpeg
            };
            render_raster(mosaic, scale, background)
                .save_with_format(path, fmt)
                .with_context(|| format!("writing {}", path.display()))?
        }
        Format::Json => fs::write(path, serde_json::to_vec_pretty(mosaic)?)
            .with_context(|| format!("writing {}", path.display()))?,
    }
    Ok(())
}
