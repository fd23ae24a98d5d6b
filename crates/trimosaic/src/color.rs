//! RGB colours and the statistics the engine splits on.
//!
//! Channels are independent reals; distance is per-channel Euclidean. No
//! colour-space conversion happens anywhere in the pipeline.

use serde::{Deserialize, Serialize};

/// Three channel intensities, nominally in `0.0..=255.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f64; 3]);

impl Color {
    /// Background for triangles that own no samples.
    pub const WHITE: Color = Color([255.0, 255.0, 255.0]);
    pub const BLACK: Color = Color([0.0, 0.0, 0.0]);

    #[inline]
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self(rgb.map(f64::from))
    }

    /// Rounded and clamped to `0..=255`.
    #[inline]
    pub fn to_rgb8(self) -> [u8; 3] {
        self.0.map(|c| c.round().clamp(0.0, 255.0) as u8)
    }

    /// CSS functional notation, e.g. `rgb(12,34,56)`.
    pub fn css(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("rgb({r},{g},{b})")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Per-channel arithmetic mean; `None` for an empty set.
pub fn mean<I>(colors: I) -> Option<Color>
where
    I: IntoIterator<Item = Color>,
{
    let mut sum = [0.0; 3];
    let mut n = 0usize;
    for c in colors {
        for (s, x) in sum.iter_mut().zip(c.0) {
            *s += x;
        }
        n += 1;
    }
    if n == 0 {
        return None;
    }
    Some(Color(sum.map(|s| s / n as f64)))
}

/// Mean squared deviation per channel, averaged over the three channels.
///
/// `None` for an empty set: such a set cannot be split and is never compared
/// against the threshold.
pub fn variance<I>(colors: I) -> Option<f64>
where
    I: IntoIterator<Item = Color>,
    I::IntoIter: Clone,
{
    let iter = colors.into_iter();
    let m = mean(iter.clone())?;
    let mut acc = 0.0;
    let mut n = 0usize;
    for c in iter {
        for (x, mu) in c.0.iter().zip(m.0) {
            acc += (x - mu) * (x - mu);
        }
        n += 1;
    }
    Some(acc / (3 * n) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(std::iter::empty()), None);
        assert_eq!(variance(std::iter::empty::<Color>()), None);
    }

    #[test]
    fn uniform_set_has_zero_variance() {
        let c = Color::from_rgb8([10, 200, 30]);
        let v = variance(vec![c; 5]).unwrap();
        assert_eq!(v, 0.0);
        assert_eq!(mean(vec![c; 5]), Some(c));
    }

    #[test]
    fn variance_averages_channels() {
        // One channel differs by 10 around a mean of 5: per-channel variance 25.
        let a = Color([0.0, 0.0, 0.0]);
        let b = Color([10.0, 0.0, 0.0]);
        let v = variance(vec![a, b]).unwrap();
        assert!((v - 25.0 / 3.0).abs() < 1e-12);
        assert_eq!(mean(vec![a, b]), Some(Color([5.0, 0.0, 0.0])));
    }

    #[test]
    fn rgb8_round_trip_and_css() {
        let c = Color([12.4, 255.6, -3.0]);
        assert_eq!(c.to_rgb8(), [12, 255, 0]);
        assert_eq!(c.css(), "rgb(12,255,0)");
        assert_eq!(Color::default(), Color::WHITE);
    }
}
