/// HDR to JPEG thumbnail conversion
///
/// This module handles:
/// - Routing input paths to a decoder by extension (dispatch.rs)
/// - Decoding Radiance and OpenEXR files to float buffers (loader.rs)
/// - Reducing and tone-mapping to 8-bit thumbnails (thumbnail.rs)
/// - Writing JPEGs next to the inputs (writer.rs)
///
/// Nothing here prints; every stage returns a value and the driver reports.

pub mod dispatch;
pub mod loader;
pub mod thumbnail;
pub mod writer;

use chrono::Utc;
use std::path::{Path, PathBuf};

use crate::state::{BatchSummary, ConversionOutcome, ConvertError, SkipReason};
use loader::HdrLoader;

/// Run every stage for one file
fn convert(path: &Path, loader: &impl HdrLoader) -> Result<Option<PathBuf>, ConvertError> {
    let Some(format) = dispatch::route(path) else {
        return Ok(None);
    };

    let source = loader.load(format, path)?;
    // `source` is consumed here and freed before encoding starts
    let thumbnail = thumbnail::downsample(source)?;

    let dest = writer::output_path(path)?;
    writer::write_jpeg(&thumbnail, &dest)?;

    Ok(Some(dest))
}

/// Convert one input path to a JPEG thumbnail
pub fn convert_file(path: &Path, loader: &impl HdrLoader) -> ConversionOutcome {
    match convert(path, loader) {
        Ok(Some(dest)) => ConversionOutcome::Success(dest),
        Ok(None) => ConversionOutcome::Skipped(SkipReason::UnsupportedExtension),
        Err(err) => err.into(),
    }
}

/// Convert every path in order, reporting each outcome as it happens
///
/// A failing file never stops the batch.
pub fn run_batch<F>(paths: &[PathBuf], loader: &impl HdrLoader, mut report: F) -> BatchSummary
where
    F: FnMut(&Path, &ConversionOutcome),
{
    let start = Utc::now();
    let mut summary = BatchSummary::default();

    for path in paths {
        let outcome = convert_file(path, loader);
        report(path, &outcome);
        summary.record(&outcome);
    }

    summary.elapsed_ms = (Utc::now() - start).num_milliseconds();
    summary
}
