use serde::{Deserialize, Serialize};
use sk_core::{Image, Rgba};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastConfig {
    /// Slope of the stretch. `1.0` is the identity, values above one push
    /// samples away from mid-gray.
    pub amount: f32,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self { amount: 1.5 }
    }
}

/// Applies `c' = clamp(c * amount + 0.5 - 0.5 * amount, 0, 1)` to the R, G and
/// B channels in normalized units.
pub fn enhance_contrast(src: &Image<Rgba>, cfg: &ContrastConfig) -> Image<Rgba> {
    let lut = contrast_lut(cfg.amount);
    src.map(|[r, g, b, a]| {
        [
            lut[usize::from(r)],
            lut[usize::from(g)],
            lut[usize::from(b)],
            a,
        ]
    })
}

fn contrast_lut(amount: f32) -> [u8; 256] {
    let offset = 0.5 - 0.5 * amount;
    let mut lut = [0u8; 256];
    for (v, out) in lut.iter_mut().enumerate() {
        let c = v as f32 / 255.0;
        let stretched = (c * amount + offset).clamp(0.0, 1.0);
        *out = (stretched * 255.0).round() as u8;
    }
    lut
}
