//! Hilditch thinning.
//!
//! A foreground pixel with neighbors `p2..p9` (clockwise from north) is
//! removable in a pass iff all of the following hold on the pass snapshot:
//!
//! 1. `2 <= B <= 6`, where `B` is the number of foreground neighbors.
//! 2. `A == 1`, where `A` is the crossing number of the pixel.
//! 3. `p2 * p4 * p8 == 0` or `A(p2) != 1`.
//! 4. `p2 * p4 * p6 == 0` or `A(p4) != 1`.
//!
//! `A(p)` at a neighbor is evaluated on that neighbor's own 8-neighborhood;
//! neighbors on the outer ring count as `A = 0`.
//!
//! Passes repeat until one removes nothing. Each pass scans interior rows in
//! parallel against an immutable snapshot, collects the removable indices and
//! only then clears them all at once. Every non-empty pass strictly reduces
//! the foreground count, so the loop terminates on any input.

use log::debug;
use rayon::prelude::*;
use sk_core::neighborhood::{E, N, S, W};
use sk_core::{BinaryMask, crossing_number, neighbor_sum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThinningReport {
    /// Passes that removed at least one pixel.
    pub passes: usize,
    /// Total pixels cleared across all passes.
    pub removed: usize,
}

/// Thins `mask` in place to its fixed point.
pub fn thin(mask: &mut BinaryMask) -> ThinningReport {
    let mut report = ThinningReport::default();

    loop {
        let removals = removal_candidates(mask);
        if removals.is_empty() {
            break;
        }

        let removed = mask
            .clear_indices(&removals)
            .expect("removal indices come from the mask's own interior");
        report.passes += 1;
        report.removed += removed;
        debug!(
            "thinning pass={} removed={} remaining={}",
            report.passes,
            removed,
            mask.count_foreground()
        );
    }

    report
}

/// Copying variant of [`thin`].
pub fn thinned(mask: &BinaryMask) -> (BinaryMask, ThinningReport) {
    let mut out = mask.clone();
    let report = thin(&mut out);
    (out, report)
}

/// Linear indices of every pixel removable in one pass over `snapshot`, in
/// row-major order.
pub fn removal_candidates(snapshot: &BinaryMask) -> Vec<usize> {
    let (w, h) = snapshot.dimensions();
    if w < 3 || h < 3 {
        return Vec::new();
    }

    (1..h - 1)
        .into_par_iter()
        .flat_map_iter(|y| {
            (1..w - 1)
                .filter(move |&x| is_removable(snapshot, x, y))
                .map(move |x| y * w + x)
        })
        .collect()
}

pub fn is_removable(snapshot: &BinaryMask, x: usize, y: usize) -> bool {
    if !snapshot.is_foreground(x, y) {
        return false;
    }
    let Some(n) = snapshot.neighborhood(x, y) else {
        return false;
    };

    let b = neighbor_sum(&n);
    if !(2..=6).contains(&b) {
        return false;
    }
    if crossing_number(&n) != 1 {
        return false;
    }

    let north_ok = n[N] * n[E] * n[W] == 0 || crossing_at(snapshot, x, y - 1) != 1;
    if !north_ok {
        return false;
    }

    n[N] * n[E] * n[S] == 0 || crossing_at(snapshot, x + 1, y) != 1
}

fn crossing_at(snapshot: &BinaryMask, x: usize, y: usize) -> u8 {
    snapshot
        .neighborhood(x, y)
        .map_or(0, |n| crossing_number(&n))
}
