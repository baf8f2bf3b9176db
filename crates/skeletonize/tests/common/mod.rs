#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use skeletonize::{BLACK, BinaryMask, Image, PipelineError, PipelineObserver, Rgba, Stage, WHITE};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// White canvas with `ink` pixels painted black.
pub fn drawing<F>(width: usize, height: usize, ink: F) -> Image<Rgba>
where
    F: Fn(usize, usize) -> bool,
{
    let data = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| if ink(x, y) { BLACK } else { WHITE })
        .collect();
    Image::from_vec(width, height, data).expect("buffer matches dimensions")
}

pub fn ink_mask<F>(width: usize, height: usize, ink: F) -> BinaryMask
where
    F: Fn(usize, usize) -> bool,
{
    let data = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| u8::from(ink(x, y)))
        .collect();
    BinaryMask::from_vec(width, height, data).expect("buffer matches dimensions")
}

fn dist2(x: usize, y: usize, cx: usize, cy: usize) -> usize {
    x.abs_diff(cx).pow(2) + y.abs_diff(cy).pow(2)
}

pub fn in_disk(cx: usize, cy: usize, r: usize) -> impl Fn(usize, usize) -> bool {
    move |x, y| dist2(x, y, cx, cy) <= r * r
}

/// Annulus with exclusive inner and inclusive outer radius.
pub fn in_ring(cx: usize, cy: usize, outer: usize, inner: usize) -> impl Fn(usize, usize) -> bool {
    move |x, y| {
        let d = dist2(x, y, cx, cy);
        d > inner * inner && d <= outer * outer
    }
}

/// Two disks joined by a horizontal bar, centred in a `width x height` frame.
pub fn in_dumbbell(
    width: usize,
    height: usize,
    r: usize,
    gap: usize,
    bar: usize,
) -> impl Fn(usize, usize) -> bool {
    let cy = height / 2;
    let (c1, c2) = (width / 2 - gap / 2, width / 2 + gap / 2);
    move |x, y| {
        dist2(x, y, c1, cy) <= r * r
            || dist2(x, y, c2, cy) <= r * r
            || ((c1..=c2).contains(&x) && y.abs_diff(cy) <= bar / 2)
    }
}

/// One-pixel "+" through `(c, c)` with arms spanning `lo..=hi`.
pub fn in_plus(c: usize, lo: usize, hi: usize) -> impl Fn(usize, usize) -> bool {
    move |x, y| (y == c && (lo..=hi).contains(&x)) || (x == c && (lo..=hi).contains(&y))
}

/// Vertical stem from `(c, c)` down `stem` pixels, with diagonal arms of
/// length `arm` rising to the left and right.
pub fn in_y(c: usize, stem: usize, arm: usize) -> impl Fn(usize, usize) -> bool {
    move |x, y| {
        (x == c && (c..=c + stem).contains(&y))
            || (y < c && c - y <= arm && (x + (c - y) == c || x == c + (c - y)))
    }
}

pub fn count_color(img: &Image<Rgba>, color: Rgba) -> usize {
    img.data().iter().filter(|&&px| px == color).count()
}

#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub stages: Mutex<Vec<Stage>>,
    pub failures: Mutex<Vec<(Stage, usize, usize)>>,
    pub thinning_reports: Mutex<usize>,
}

impl RecordingObserver {
    pub fn stages(&self) -> Vec<Stage> {
        self.stages.lock().expect("lock").clone()
    }

    pub fn failures(&self) -> Vec<(Stage, usize, usize)> {
        self.failures.lock().expect("lock").clone()
    }
}

impl PipelineObserver for RecordingObserver {
    fn stage_completed(&self, stage: Stage, _width: usize, _height: usize, _elapsed: Duration) {
        self.stages.lock().expect("lock").push(stage);
    }

    fn thinning_finished(&self, _report: &skeletonize::ThinningReport) {
        *self.thinning_reports.lock().expect("lock") += 1;
    }

    fn failed(&self, stage: Stage, width: usize, height: usize, _error: &PipelineError) {
        self.failures
            .lock()
            .expect("lock")
            .push((stage, width, height));
    }
}
