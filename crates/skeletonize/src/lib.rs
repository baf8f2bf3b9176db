//! Umbrella crate for the skeletonization workspace.
//!
//! Re-exports the stage crates and adds the orchestrating [`Skeletonizer`]:
//! contrast, grayscale, Otsu binarization, morphological closing, Hilditch
//! thinning and crossing-number annotation, in that order. Every stage
//! consumes the full output of the previous one.
//!
//! Container decode/encode sits behind [`ImageCodec`]; [`PngCodec`] is the
//! provided implementation.

mod codec;
mod config;
mod error;
mod observer;
mod pipeline;

pub use codec::{ImageCodec, PngCodec};
pub use config::SkeletonConfig;
pub use error::{BoxError, PipelineError, Stage};
pub use observer::{LogObserver, NoopObserver, PipelineObserver};
pub use pipeline::{ProcessedImage, SkeletonOutput, Skeletonizer};

pub use sk_binarize::*;
pub use sk_core::*;
pub use sk_morph::*;
pub use sk_thin::*;
pub use sk_tone::*;
pub use sk_topo::*;
