/// State management module
/// 
/// This module holds everything that flows between the pipeline and the driver:
/// - Stage errors (error.rs)
/// - Per-file conversion outcomes (data.rs)
/// - Batch totals and timing (summary.rs)

pub mod error;
pub mod data;
pub mod summary;

pub use data::{ConversionOutcome, SkipReason};
pub use error::ConvertError;
pub use summary::BatchSummary;
