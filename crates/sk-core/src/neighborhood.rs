//! Moore neighborhood helpers shared by thinning and classification.

/// Neighbor samples ordered clockwise from north: `p2, p3, ..., p9`.
pub type Neighborhood = [u8; 8];

pub const N: usize = 0;
pub const NE: usize = 1;
pub const E: usize = 2;
pub const SE: usize = 3;
pub const S: usize = 4;
pub const SW: usize = 5;
pub const W: usize = 6;
pub const NW: usize = 7;

/// `(dx, dy)` for each neighbor slot, same clockwise order as [`Neighborhood`].
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Number of `0 -> 1` transitions walking the ring clockwise, wrapping from
/// `p9` back to `p2`.
pub fn crossing_number(n: &Neighborhood) -> u8 {
    let mut count = 0u8;
    for i in 0..8 {
        if n[i] == 0 && n[(i + 1) % 8] == 1 {
            count += 1;
        }
    }
    count
}

/// Number of set neighbors.
pub fn neighbor_sum(n: &Neighborhood) -> u8 {
    n.iter().sum()
}
