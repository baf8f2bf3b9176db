use serde::{Deserialize, Serialize};

use crate::Histogram;

/// Returned when no candidate yields a positive between-class variance.
pub const DEFAULT_THRESHOLD: u8 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OtsuConfig {
    /// Multiplier applied to the Otsu threshold before binarizing.
    pub scale: f64,
}

impl Default for OtsuConfig {
    fn default() -> Self {
        Self { scale: 0.85 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtsuThreshold {
    /// Variance-maximizing split: the lower class is `0..=raw`.
    pub raw: u8,
    /// `trunc(raw * scale)`, the cutoff actually applied.
    pub scaled: u8,
}

/// Exhaustive Otsu search in ascending `t`; only a strict improvement replaces
/// the current best, so ties resolve to the lowest `t`. The scan stops as soon
/// as the upper class becomes empty.
pub fn otsu_threshold(hist: &Histogram) -> u8 {
    let counts = hist.counts();
    let total = hist.total();
    let sum: u64 = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| i as u64 * c)
        .sum();

    let mut sum_b = 0u64;
    let mut w_b = 0u64;
    let mut max_var = 0.0f64;
    let mut threshold = DEFAULT_THRESHOLD;

    for (t, &count) in counts.iter().enumerate() {
        w_b += count;
        if w_b == 0 {
            continue;
        }
        let w_f = total - w_b;
        if w_f == 0 {
            break;
        }

        sum_b += t as u64 * count;
        let m_b = sum_b as f64 / w_b as f64;
        let m_f = (sum - sum_b) as f64 / w_f as f64;
        let var_between = w_b as f64 * w_f as f64 * (m_b - m_f).powi(2);

        if var_between > max_var {
            max_var = var_between;
            threshold = t as u8;
        }
    }

    threshold
}

pub fn scale_threshold(raw: u8, scale: f64) -> u8 {
    (f64::from(raw) * scale).trunc().clamp(0.0, 255.0) as u8
}
