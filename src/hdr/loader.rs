/// HDR pixel data loader
///
/// This module decodes Radiance and OpenEXR files into one normalized shape:
/// width, height, channel count and a flat row-major, channel-interleaved
/// buffer of f32 samples.

use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

use super::dispatch::SourceFormat;
use crate::state::error::{ConvertError, ConvertResult};

/// Decoded floating-point image, owned by the pipeline for one conversion
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    width: usize,
    height: usize,
    channels: usize,
    samples: Vec<f32>,
}

impl SourceImage {
    /// Wrap a decoded buffer, checking it matches the stated dimensions
    pub fn new(width: usize, height: usize, channels: usize, samples: Vec<f32>) -> ConvertResult<Self> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(ConvertError::Decode(format!(
                "empty image: {}x{} with {} channels",
                width, height, channels
            )));
        }

        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels));
        if expected != Some(samples.len()) {
            return Err(ConvertError::Decode(format!(
                "buffer holds {} samples, {}x{}x{} expected",
                samples.len(),
                width,
                height,
                channels
            )));
        }

        Ok(Self { width, height, channels, samples })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

/// Source of decoded HDR images
///
/// The pipeline only talks to decoders through this trait, so tests can
/// feed synthetic buffers or simulate decoder failures.
pub trait HdrLoader {
    fn load(&self, format: SourceFormat, path: &Path) -> ConvertResult<SourceImage>;
}

/// Loader backed by the `image` crate decoders
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl HdrLoader for FileLoader {
    fn load(&self, format: SourceFormat, path: &Path) -> ConvertResult<SourceImage> {
        match format {
            SourceFormat::Radiance => load_radiance(path),
            SourceFormat::OpenExr => load_openexr(path),
        }
    }
}

/// Decode a file with the given format, ignoring what the extension says
fn decode(path: &Path, format: ImageFormat) -> ConvertResult<DynamicImage> {
    let mut reader = ImageReader::open(path)
        .map_err(|e| ConvertError::Decode(format!("failed to open {}: {}", path.display(), e)))?;
    reader.set_format(format);
    // HDR sources routinely exceed the default allocation limit
    reader.no_limits();

    reader.decode().map_err(|e| ConvertError::Decode(e.to_string()))
}

/// Radiance: the file decides the channel count
fn load_radiance(path: &Path) -> ConvertResult<SourceImage> {
    let decoded = decode(path, ImageFormat::Hdr)?;
    let (width, height) = (decoded.width() as usize, decoded.height() as usize);

    let (channels, samples) = match decoded {
        DynamicImage::ImageRgb32F(buffer) => (3, buffer.into_raw()),
        DynamicImage::ImageRgba32F(buffer) => (4, buffer.into_raw()),
        // Integer layouts are widened to float RGB
        other => (3, other.into_rgb32f().into_raw()),
    };

    SourceImage::new(width, height, channels, samples)
}

/// OpenEXR: always RGBA, alpha defaults to 1.0 when the file has none
fn load_openexr(path: &Path) -> ConvertResult<SourceImage> {
    let decoded = decode(path, ImageFormat::OpenExr)?;
    let (width, height) = (decoded.width() as usize, decoded.height() as usize);

    SourceImage::new(width, height, 4, decoded.into_rgba32f().into_raw())
}
