//! Foundational primitives for skeletonization.
//!
//! ## Grids
//! [`Image`] is a row-major buffer with fixed `width` and `height`. Every
//! pipeline stage produces a grid of the same dimensions as its input.
//!
//! ## Binary masks
//! [`BinaryMask`] restricts samples to [`FOREGROUND`] (`1`) and
//! [`BACKGROUND`] (`0`). Neighborhood reads are bounds-checked: only interior
//! pixels (not on the outer 1-pixel ring) expose a full 8-neighborhood.
//!
//! ## Neighbor order
//! Neighbors are listed clockwise starting at north: `N, NE, E, SE, S, SW, W,
//! NW` (Hilditch's `p2..p9`).

mod error;
mod image;
mod mask;
pub mod neighborhood;
mod pixel;

pub use error::Error;
pub use image::{Image, ImageView, ensure_dimensions};
pub use mask::{BACKGROUND, BinaryMask, FOREGROUND};
pub use neighborhood::{Neighborhood, crossing_number, neighbor_sum};
pub use pixel::{BLACK, BLUE, RED, Rgba, WHITE};
