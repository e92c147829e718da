/// Shared data structures for the conversion pipeline
/// 
/// These values flow from the pipeline back to the batch driver,
/// which turns them into console lines.

use std::path::PathBuf;

use super::error::ConvertError;

/// Why a file was not converted at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Extension is neither `hdr` nor `exr`
    UnsupportedExtension,
}

/// Result of converting one input path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// JPEG written to the contained path
    Success(PathBuf),
    Skipped(SkipReason),
    /// Decoder failed, with its message
    DecodeFailed(String),
    AllocationFailed,
    /// Output path derivation, JPEG encoding or the file write failed
    EncodeFailed(String),
}

impl ConversionOutcome {
    /// True for the outcomes that count against the exit status
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ConversionOutcome::DecodeFailed(_)
                | ConversionOutcome::AllocationFailed
                | ConversionOutcome::EncodeFailed(_)
        )
    }
}

impl From<ConvertError> for ConversionOutcome {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::Decode(message) => ConversionOutcome::DecodeFailed(message),
            ConvertError::Allocation { .. } => ConversionOutcome::AllocationFailed,
            ConvertError::Encode(message) => ConversionOutcome::EncodeFailed(message),
            err @ ConvertError::OutputPath(_) => ConversionOutcome::EncodeFailed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_to_outcome() {
        assert_eq!(
            ConversionOutcome::from(ConvertError::Decode("bad header".into())),
            ConversionOutcome::DecodeFailed("bad header".into())
        );
        assert_eq!(
            ConversionOutcome::from(ConvertError::Allocation { bytes: 1 << 70 }),
            ConversionOutcome::AllocationFailed
        );
        assert!(matches!(
            ConversionOutcome::from(ConvertError::OutputPath(PathBuf::from("a.tiff"))),
            ConversionOutcome::EncodeFailed(_)
        ));
    }

    #[test]
    fn test_failure_classification() {
        assert!(!ConversionOutcome::Success(PathBuf::from("a.jpg")).is_failure());
        assert!(!ConversionOutcome::Skipped(SkipReason::UnsupportedExtension).is_failure());
        assert!(ConversionOutcome::AllocationFailed.is_failure());
        assert!(ConversionOutcome::DecodeFailed(String::new()).is_failure());
        assert!(ConversionOutcome::EncodeFailed(String::new()).is_failure());
    }
}
