use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("image dimensions must be positive, got {width}x{height}")]
    EmptyImage { width: usize, height: usize },
    #[error("mask sample {value} at index {index} is neither foreground nor background")]
    NonBinarySample { index: usize, value: u8 },
    #[error("out of bounds")]
    OutOfBounds,
}
