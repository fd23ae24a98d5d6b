//! Image decoding and working-resolution sampling.

use std::path::Path;

use anyhow::{Context, Result};
use image::{imageops::FilterType, RgbImage};
use trimosaic::api::SampleGrid;

/// Working size for an image of `width × height`: at most `max_width` wide,
/// aspect ratio kept, never upscaled, never smaller than 1×1.
pub fn working_size(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width || width == 0 {
        return (width, height);
    }
    let h = (height as f64 * max_width as f64 / width as f64).round() as u32;
    (max_width.max(1), h.max(1))
}

/// Shrink `img` to the working width, if needed.
pub fn to_working_resolution(img: RgbImage, max_width: u32) -> RgbImage {
    let (w, h) = working_size(img.width(), img.height(), max_width);
    if (w, h) == img.dimensions() {
        return img;
    }
    image::imageops::resize(&img, w, h, FilterType::Triangle)
}

/// Sample every pixel of an already-decoded image.
pub fn grid_from_image(img: &RgbImage) -> Result<SampleGrid> {
    let grid = SampleGrid::from_rgb8(img.width(), img.height(), img.as_raw())?;
    Ok(grid)
}

/// Decode `path`, shrink it to `max_width`, and sample it.
pub fn load_grid(path: &Path, max_width: u32) -> Result<SampleGrid> {
    let img = image::open(path)
        .with_context(|| format!("decoding {}", path.display()))?
        .to_rgb8();
    let (src_w, src_h) = img.dimensions();
    let img = to_working_resolution(img, max_width);
    tracing::info!(
        path = %path.display(),
        src_w,
        src_h,
        work_w = img.width(),
        work_h = img.height(),
        "image loaded"
    );
    grid_from_image(&img)
}
