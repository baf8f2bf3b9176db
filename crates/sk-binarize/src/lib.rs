//! Global binarization by Otsu's method.
//!
//! The threshold search runs over a 256-bucket [`Histogram`] and keeps the
//! first candidate with the strictly largest between-class variance. The
//! selected value is then scaled down by [`OtsuConfig::scale`] (default
//! `0.85`) before it is applied, which biases the cut toward keeping more dark
//! foreground detail.
//!
//! Pixel rule: a sample is foreground iff `value <= scaled`, i.e. it falls in
//! the lower (dark) class of the scaled split.

mod histogram;
mod otsu;

pub use histogram::Histogram;
pub use otsu::{
    DEFAULT_THRESHOLD, OtsuConfig, OtsuThreshold, otsu_threshold, scale_threshold,
};

use sk_core::{BinaryMask, ImageView};

#[derive(Debug, Clone, PartialEq)]
pub struct Binarization {
    pub mask: BinaryMask,
    pub threshold: OtsuThreshold,
}

/// Builds the histogram of `gray`, selects the Otsu threshold and maps every
/// pixel to foreground or background.
pub fn binarize(gray: &ImageView<'_, u8>, cfg: &OtsuConfig) -> Binarization {
    let hist = Histogram::from_view(gray);
    let raw = otsu_threshold(&hist);
    let threshold = OtsuThreshold {
        raw,
        scaled: scale_threshold(raw, cfg.scale),
    };

    Binarization {
        mask: apply_threshold(gray, threshold.scaled),
        threshold,
    }
}

/// Foreground iff `value <= cutoff`.
pub fn apply_threshold(gray: &ImageView<'_, u8>, cutoff: u8) -> BinaryMask {
    BinaryMask::from_predicate(gray, |v| v <= cutoff)
}
