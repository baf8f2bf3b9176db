//! Tone stages that run before binarization.
//!
//! - [`enhance_contrast`] stretches each RGB channel linearly about mid-gray.
//! - [`to_luma`] reduces RGBA to a single luminance channel.
//!
//! Alpha is carried through contrast untouched and ignored by luminance.

mod contrast;
mod gray;

pub use contrast::{ContrastConfig, enhance_contrast};
pub use gray::{LumaWeights, to_luma};
