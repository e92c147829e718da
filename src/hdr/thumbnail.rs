/// Thumbnail generation from decoded HDR data
///
/// The source is reduced by an integer factor derived from its width alone
/// (nearest-neighbour, top-left sample of each block) and every kept sample
/// is tone-mapped to 8 bits.

use super::loader::SourceImage;
use crate::color::tone_map;
use crate::state::error::{ConvertError, ConvertResult};

/// Width the reduction factor aims for
pub const TARGET_WIDTH: usize = 1280;

/// Tone-mapped, reduced image ready for encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailImage {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    /// Row-major, channel-interleaved 8-bit samples
    pub samples: Vec<u8>,
}

/// Integer divisor applied to both dimensions, never below 1
///
/// Height plays no part: a tall, narrow image keeps its full height.
pub fn reduction_factor(width: usize) -> usize {
    (width / TARGET_WIDTH).max(1)
}

/// Reserve the output buffer up front so an oversized image fails cleanly
fn allocate_thumbnail(width: usize, height: usize, channels: usize) -> ConvertResult<Vec<u8>> {
    let too_large = || ConvertError::Allocation {
        bytes: width as u128 * height as u128 * channels as u128,
    };

    let size = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(too_large)?;

    let mut samples = Vec::new();
    samples.try_reserve_exact(size).map_err(|_| too_large())?;
    Ok(samples)
}

/// Reduce and tone-map a decoded image
///
/// Takes ownership of the source; its buffer is released when this returns,
/// whether or not the thumbnail could be built.
pub fn downsample(source: SourceImage) -> ConvertResult<ThumbnailImage> {
    let reduction = reduction_factor(source.width());
    let width = source.width() / reduction;
    let height = source.height() / reduction;
    let channels = source.channels();

    let mut samples = allocate_thumbnail(width, height, channels)?;

    let stride = source.width();
    let pixels = source.samples();
    for h in 0..height {
        for w in 0..width {
            let big_idx = ((h * reduction) * stride + w * reduction) * channels;
            samples.extend(pixels[big_idx..big_idx + channels].iter().map(|&v| tone_map(v)));
        }
    }

    Ok(ThumbnailImage { width, height, channels, samples })
}
