//! Binary morphology with the 3x3 Moore structuring element.
//!
//! Each operator reads its input as an immutable snapshot and writes a fresh
//! mask, so no pixel ever sees a neighbor updated in the same pass. The outer
//! 1-pixel ring is never evaluated and is copied through unchanged.

use sk_core::BinaryMask;
use sk_core::neighborhood::Neighborhood;

/// A background pixel becomes foreground if any of its 8 neighbors is
/// foreground.
pub fn dilate3x3(src: &BinaryMask) -> BinaryMask {
    src.par_map_interior(|x, y| {
        src.is_foreground(x, y) || src.neighborhood(x, y).is_some_and(|n| any_set(&n))
    })
}

/// A foreground pixel becomes background if any of its 8 neighbors is
/// background.
pub fn erode3x3(src: &BinaryMask) -> BinaryMask {
    src.par_map_interior(|x, y| {
        src.is_foreground(x, y) && src.neighborhood(x, y).is_some_and(|n| all_set(&n))
    })
}

/// `iterations` rounds of dilate followed by erode. Zero iterations returns a
/// copy of the input.
pub fn close3x3(src: &BinaryMask, iterations: usize) -> BinaryMask {
    let mut out = src.clone();
    for _ in 0..iterations {
        let dilated = dilate3x3(&out);
        out = erode3x3(&dilated);
    }
    out
}

fn any_set(n: &Neighborhood) -> bool {
    n.iter().any(|&v| v != 0)
}

fn all_set(n: &Neighborhood) -> bool {
    n.iter().all(|&v| v != 0)
}
