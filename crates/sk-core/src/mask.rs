use rayon::prelude::*;

use crate::neighborhood::{NEIGHBOR_OFFSETS, Neighborhood};
use crate::{Error, Image, ImageView};

pub const FOREGROUND: u8 = 1;
pub const BACKGROUND: u8 = 0;

/// Two-valued grid. Every sample is either [`FOREGROUND`] or [`BACKGROUND`];
/// no constructor or mutator admits a third value.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryMask {
    image: Image<u8>,
}

impl BinaryMask {
    /// All-background mask.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            image: Image::new_fill(width, height, BACKGROUND),
        }
    }

    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self, Error> {
        if let Some((index, &value)) = data
            .iter()
            .enumerate()
            .find(|(_, v)| **v != FOREGROUND && **v != BACKGROUND)
        {
            return Err(Error::NonBinarySample { index, value });
        }

        Ok(Self {
            image: Image::from_vec(width, height, data)?,
        })
    }

    /// Marks every sample for which `is_foreground` holds.
    pub fn from_predicate<T, F>(src: &ImageView<'_, T>, is_foreground: F) -> Self
    where
        T: Copy,
        F: Fn(T) -> bool,
    {
        let data = src
            .data()
            .iter()
            .map(|&v| if is_foreground(v) { FOREGROUND } else { BACKGROUND })
            .collect();

        Self {
            image: Image::from_vec(src.width(), src.height(), data)
                .expect("view length matches its dimensions"),
        }
    }

    /// Parses an ASCII picture where `#` is foreground and anything else is
    /// background. Rows must have equal length.
    pub fn from_ascii(rows: &[&str]) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            if row.len() != width {
                return Err(Error::SizeMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend(
                row.bytes()
                    .map(|b| if b == b'#' { FOREGROUND } else { BACKGROUND }),
            );
        }
        Self::from_vec(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.image.width()
    }

    pub fn height(&self) -> usize {
        self.image.height()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.image.dimensions()
    }

    pub fn data(&self) -> &[u8] {
        self.image.data()
    }

    pub fn as_image(&self) -> &Image<u8> {
        &self.image
    }

    pub fn as_view(&self) -> ImageView<'_, u8> {
        self.image.as_view()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.image.get(x, y).copied()
    }

    /// Out-of-bounds coordinates read as background.
    pub fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Some(FOREGROUND)
    }

    pub fn set(&mut self, x: usize, y: usize, foreground: bool) -> Result<(), Error> {
        let px = self.image.get_mut(x, y).ok_or(Error::OutOfBounds)?;
        *px = if foreground { FOREGROUND } else { BACKGROUND };
        Ok(())
    }

    pub fn count_foreground(&self) -> usize {
        self.image.data().iter().filter(|&&v| v == FOREGROUND).count()
    }

    /// True when all 8 neighbors of `(x, y)` lie inside the grid.
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x >= 1 && y >= 1 && x + 1 < self.width() && y + 1 < self.height()
    }

    /// Neighbor samples of an interior pixel, clockwise from north. Border
    /// and out-of-bounds pixels have no full neighborhood and yield `None`.
    pub fn neighborhood(&self, x: usize, y: usize) -> Option<Neighborhood> {
        if !self.is_interior(x, y) {
            return None;
        }

        let w = self.width();
        let data = self.image.data();
        let mut n = [BACKGROUND; 8];
        for (slot, (dx, dy)) in NEIGHBOR_OFFSETS.iter().enumerate() {
            let nx = x.wrapping_add_signed(*dx);
            let ny = y.wrapping_add_signed(*dy);
            n[slot] = data[ny * w + nx];
        }
        Some(n)
    }

    /// Sets every listed linear index to background; returns how many were
    /// foreground before.
    pub fn clear_indices(&mut self, indices: &[usize]) -> Result<usize, Error> {
        let data = self.image.data_mut();
        let mut cleared = 0;
        for &idx in indices {
            let px = data.get_mut(idx).ok_or(Error::OutOfBounds)?;
            if *px == FOREGROUND {
                cleared += 1;
            }
            *px = BACKGROUND;
        }
        Ok(cleared)
    }

    /// Row-major coordinates of every foreground sample.
    pub fn foreground_coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.width();
        self.image
            .data()
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == FOREGROUND)
            .map(move |(i, _)| (i % w, i / w))
    }

    /// Recomputes every interior sample from `rule(x, y)`, evaluated against
    /// `self` as an immutable snapshot. The outer 1-pixel ring is copied
    /// through unchanged. Interior rows are processed in parallel.
    pub fn par_map_interior<F>(&self, rule: F) -> BinaryMask
    where
        F: Fn(usize, usize) -> bool + Sync,
    {
        let mut out = self.clone();
        let (w, h) = self.dimensions();
        if w < 3 || h < 3 {
            return out;
        }

        out.image
            .data_mut()
            .par_chunks_mut(w)
            .enumerate()
            .skip(1)
            .take(h - 2)
            .for_each(|(y, row)| {
                for (x, px) in row.iter_mut().enumerate().take(w - 1).skip(1) {
                    *px = if rule(x, y) { FOREGROUND } else { BACKGROUND };
                }
            });

        out
    }

    /// Grayscale rendering: foreground black, background white.
    pub fn to_luma(&self) -> Image<u8> {
        self.image
            .map(|v| if v == FOREGROUND { 0u8 } else { 255u8 })
    }
}
