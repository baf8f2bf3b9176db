use std::time::Instant;

use sk_binarize::{Binarization, OtsuThreshold, binarize};
use sk_core::{BinaryMask, Image, Rgba, ensure_dimensions};
use sk_morph::close3x3;
use sk_thin::{ThinningReport, thin};
use sk_tone::{enhance_contrast, to_luma};
use sk_topo::{Features, classify, count_components, render_annotated};

use crate::{ImageCodec, PipelineError, PipelineObserver, SkeletonConfig, Stage};

#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonOutput {
    /// Same dimensions as the input; white background, black skeleton, red
    /// endpoint disks, blue branch disks.
    pub annotated: Image<Rgba>,
    pub skeleton: BinaryMask,
    pub features: Features,
    pub threshold: OtsuThreshold,
    pub thinning: ThinningReport,
    /// 8-connected components of the skeleton.
    pub components: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct Skeletonizer {
    config: SkeletonConfig,
}

impl Skeletonizer {
    pub fn new(config: SkeletonConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SkeletonConfig {
        &self.config
    }

    /// Runs every stage on a decoded RGBA grid.
    pub fn run<O>(&self, input: &Image<Rgba>, observer: &O) -> Result<SkeletonOutput, PipelineError>
    where
        O: PipelineObserver + ?Sized,
    {
        let (width, height) = input.dimensions();
        if ensure_dimensions(width, height).is_err() {
            let err = PipelineError::Dimension { width, height };
            observer.failed(Stage::Validate, width, height, &err);
            return Err(err);
        }

        let cfg = &self.config;
        let timed = StageTimer {
            observer,
            width,
            height,
        };

        let contrasted = timed.run(Stage::Contrast, || {
            enhance_contrast(input, &cfg.contrast_config())
        });
        let gray = timed.run(Stage::Grayscale, || to_luma(&contrasted, cfg.luma));
        drop(contrasted);

        let Binarization { mask, threshold } =
            timed.run(Stage::Binarize, || binarize(&gray.as_view(), &cfg.otsu_config()));
        drop(gray);

        let mut skeleton = timed.run(Stage::Close, || close3x3(&mask, cfg.closing_iterations));
        drop(mask);

        let thinning = timed.run(Stage::Thin, || thin(&mut skeleton));
        observer.thinning_finished(&thinning);

        let features = timed.run(Stage::Classify, || classify(&skeleton));
        let annotated = timed.run(Stage::Render, || {
            render_annotated(&skeleton, &features, &cfg.marker_style())
        });

        Ok(SkeletonOutput {
            annotated,
            components: count_components(&skeleton),
            skeleton,
            features,
            threshold,
            thinning,
        })
    }

    /// Decodes `bytes`, runs the pipeline and re-encodes the annotated grid.
    pub fn process_bytes<C, O>(
        &self,
        bytes: &[u8],
        codec: &C,
        observer: &O,
    ) -> Result<ProcessedImage, PipelineError>
    where
        C: ImageCodec + ?Sized,
        O: PipelineObserver + ?Sized,
    {
        let input = codec
            .decode(bytes)
            .inspect_err(|err| observer.failed(Stage::Decode, 0, 0, err))?;

        let output = self.run(&input, observer)?;

        let (width, height) = output.annotated.dimensions();
        let encoded = codec
            .encode(&output.annotated)
            .inspect_err(|err| observer.failed(Stage::Encode, width, height, err))?;

        Ok(ProcessedImage {
            bytes: encoded,
            content_type: codec.content_type(),
        })
    }
}

struct StageTimer<'a, O: ?Sized> {
    observer: &'a O,
    width: usize,
    height: usize,
}

impl<O: PipelineObserver + ?Sized> StageTimer<'_, O> {
    fn run<T>(&self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.observer
            .stage_completed(stage, self.width, self.height, start.elapsed());
        out
    }
}
