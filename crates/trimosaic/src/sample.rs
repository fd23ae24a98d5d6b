//! Sampled pixels and the grid handed over by the image loader.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{MosaicError, Result};
use crate::geom::{pt, Point};

/// One pixel's location and observed colour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampledPoint {
    pub p: Point,
    pub color: Color,
}

impl SampledPoint {
    #[inline]
    pub fn new(x: u32, y: u32, color: Color) -> Self {
        Self {
            p: pt(f64::from(x), f64::from(y)),
            color,
        }
    }
}

/// Corners of the sampled rectangle in image coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corners {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl Corners {
    /// Rectangle `[0, width] × [0, height]`.
    pub fn of_size(width: u32, height: u32) -> Self {
        let (w, h) = (f64::from(width), f64::from(height));
        Self {
            top_left: pt(0.0, 0.0),
            top_right: pt(w, 0.0),
            bottom_left: pt(0.0, h),
            bottom_right: pt(w, h),
        }
    }
}

/// A `width × height` grid of samples at integer locations `0..width`, `0..height`.
///
/// Samples are stored x-major: every row of column 0, then column 1, and so on.
/// The bounding rectangle extends to `(width, height)`, one unit past the last
/// sample, so the root triangles cover the full pixel extent.
#[derive(Clone, Debug)]
pub struct SampleGrid {
    pub width: u32,
    pub height: u32,
    pub samples: Vec<SampledPoint>,
}

impl SampleGrid {
    /// Build from a row-major, tightly packed RGB8 buffer.
    pub fn from_rgb8(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let expected = 3 * width as usize * height as usize;
        if data.len() != expected {
            return Err(MosaicError::BufferSize {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_fn(width, height, |x, y| {
            let i = 3 * (y as usize * width as usize + x as usize);
            Color::from_rgb8([data[i], data[i + 1], data[i + 2]])
        }))
    }

    /// Build by evaluating `f(x, y)` at every grid location.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Color,
    {
        let mut samples = Vec::with_capacity(width as usize * height as usize);
        for x in 0..width {
            for y in 0..height {
                samples.push(SampledPoint::new(x, y, f(x, y)));
            }
        }
        Self {
            width,
            height,
            samples,
        }
    }

    #[inline]
    pub fn corners(&self) -> Corners {
        Corners::of_size(self.width, self.height)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
