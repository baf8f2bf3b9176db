use serde::{Deserialize, Serialize};
use sk_core::{Image, Rgba};

/// Channel weights for luminance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LumaWeights {
    /// ITU-R BT.709: `0.2126 R + 0.7152 G + 0.0722 B`.
    #[default]
    Bt709,
    /// ITU-R BT.601: `0.299 R + 0.587 G + 0.114 B`.
    Bt601,
    /// Integer mean `(R + G + B) / 3`.
    Average,
}

impl LumaWeights {
    pub fn luma(self, [r, g, b, _]: Rgba) -> u8 {
        let (wr, wg, wb) = match self {
            Self::Bt709 => (0.2126f32, 0.7152f32, 0.0722f32),
            Self::Bt601 => (0.299, 0.587, 0.114),
            Self::Average => {
                let sum = u16::from(r) + u16::from(g) + u16::from(b);
                return (sum / 3) as u8;
            }
        };
        let y = wr * f32::from(r) + wg * f32::from(g) + wb * f32::from(b);
        y.round().clamp(0.0, 255.0) as u8
    }
}

pub fn to_luma(src: &Image<Rgba>, weights: LumaWeights) -> Image<u8> {
    src.map(|px| weights.luma(px))
}
