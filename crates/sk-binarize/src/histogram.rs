use rayon::prelude::*;
use sk_core::ImageView;

/// 256-bucket luminance histogram. The counts always sum to the number of
/// samples it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; 256],
}

impl Default for Histogram {
    fn default() -> Self {
        Self { counts: [0; 256] }
    }
}

impl Histogram {
    pub fn from_counts(counts: [u64; 256]) -> Self {
        Self { counts }
    }

    /// Accumulates per-worker partial histograms over row chunks and merges
    /// them once all rows are counted.
    pub fn from_view(img: &ImageView<'_, u8>) -> Self {
        if img.width() == 0 || img.height() == 0 {
            return Self::default();
        }

        img.data()
            .par_chunks(img.width())
            .fold(Self::default, |mut hist, row| {
                hist.accumulate(row);
                hist
            })
            .reduce(Self::default, |mut a, b| {
                a.merge(&b);
                a
            })
    }

    pub fn accumulate(&mut self, samples: &[u8]) {
        for &v in samples {
            self.counts[usize::from(v)] += 1;
        }
    }

    pub fn merge(&mut self, other: &Histogram) {
        for (dst, src) in self.counts.iter_mut().zip(other.counts.iter()) {
            *dst += *src;
        }
    }

    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
