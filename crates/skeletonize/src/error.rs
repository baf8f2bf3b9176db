use std::fmt;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Pipeline stage, used to tag failures and timing reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Decode,
    Validate,
    Contrast,
    Grayscale,
    Binarize,
    Close,
    Thin,
    Classify,
    Render,
    Encode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Decode => "decode",
            Stage::Validate => "validate",
            Stage::Contrast => "contrast",
            Stage::Grayscale => "grayscale",
            Stage::Binarize => "binarize",
            Stage::Close => "close",
            Stage::Thin => "thin",
            Stage::Classify => "classify",
            Stage::Render => "render",
            Stage::Encode => "encode",
        };
        f.write_str(name)
    }
}

/// Every variant aborts the whole invocation; there is no partial output.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to decode input image")]
    Decode(#[source] BoxError),
    #[error("image dimensions must be positive, got {width}x{height}")]
    Dimension { width: usize, height: usize },
    #[error("failed to encode annotated image")]
    Encode(#[source] BoxError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("{stage} stage produced a malformed grid")]
    Core {
        stage: Stage,
        #[source]
        source: sk_core::Error,
    },
}

impl PipelineError {
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Decode(_) => Stage::Decode,
            PipelineError::Dimension { .. } | PipelineError::InvalidConfig(_) => Stage::Validate,
            PipelineError::Encode(_) => Stage::Encode,
            PipelineError::Core { stage, .. } => *stage,
        }
    }
}
