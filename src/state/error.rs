use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single pipeline stage for one file
///
/// Stages return these; the driver folds them into a `ConversionOutcome`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The decoder rejected the file (message comes from the decoder)
    #[error("decode failed: {0}")]
    Decode(String),

    /// The thumbnail buffer could not be allocated
    #[error("this file is too big ({bytes} bytes needed)")]
    Allocation { bytes: u128 },

    /// The input path has no 3-character extension to replace
    #[error("cannot derive output path from {0:?}")]
    OutputPath(PathBuf),

    /// The JPEG encoder or the final write failed
    #[error("encode failed: {0}")]
    Encode(String),
}

pub type ConvertResult<T> = Result<T, ConvertError>;
