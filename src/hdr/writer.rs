/// JPEG output for finished thumbnails
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use super::thumbnail::ThumbnailImage;
use crate::state::error::{ConvertError, ConvertResult};

/// Encoder quality, always maximum
pub const JPEG_QUALITY: u8 = 100;

/// Derive the output path by replacing a 3-character extension with `jpg`
///
/// `scene.exr` becomes `scene.jpg`. Any other extension length is rejected
/// instead of overwriting unrelated characters of the file name.
pub fn output_path(input: &Path) -> ConvertResult<PathBuf> {
    let invalid = || ConvertError::OutputPath(input.to_path_buf());

    let name = input.file_name().and_then(|n| n.to_str()).ok_or_else(invalid)?;
    let dot = name.rfind('.').ok_or_else(invalid)?;
    if name[dot + 1..].chars().count() != 3 {
        return Err(invalid());
    }

    Ok(input.with_file_name(format!("{}jpg", &name[..=dot])))
}

/// Pixel bytes in a layout the JPEG encoder accepts
///
/// JPEG has no alpha: RGBA loses its alpha to become RGB, luma+alpha becomes luma.
fn encodable_pixels(thumbnail: &ThumbnailImage) -> ConvertResult<(Cow<'_, [u8]>, ExtendedColorType)> {
    let samples = thumbnail.samples.as_slice();
    let drop_alpha = |keep: usize| -> Vec<u8> {
        samples
            .chunks_exact(keep + 1)
            .flat_map(|pixel| pixel[..keep].iter().copied())
            .collect()
    };

    match thumbnail.channels {
        1 => Ok((Cow::Borrowed(samples), ExtendedColorType::L8)),
        2 => Ok((Cow::Owned(drop_alpha(1)), ExtendedColorType::L8)),
        3 => Ok((Cow::Borrowed(samples), ExtendedColorType::Rgb8)),
        4 => Ok((Cow::Owned(drop_alpha(3)), ExtendedColorType::Rgb8)),
        n => Err(ConvertError::Encode(format!("cannot encode {} channels as JPEG", n))),
    }
}

/// Encode a thumbnail and write it to `dest`, replacing any existing file
///
/// The JPEG is built in memory first, so an encoder failure leaves nothing
/// on disk.
pub fn write_jpeg(thumbnail: &ThumbnailImage, dest: &Path) -> ConvertResult<()> {
    if thumbnail.width == 0 || thumbnail.height == 0 {
        return Err(ConvertError::Encode(format!(
            "thumbnail is {}x{}, nothing to encode",
            thumbnail.width, thumbnail.height
        )));
    }

    let width = u32::try_from(thumbnail.width)
        .map_err(|_| ConvertError::Encode(format!("width {} out of range", thumbnail.width)))?;
    let height = u32::try_from(thumbnail.height)
        .map_err(|_| ConvertError::Encode(format!("height {} out of range", thumbnail.height)))?;

    let (pixels, color_type) = encodable_pixels(thumbnail)?;

    let mut encoded = Vec::new();
    JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY)
        .encode(&pixels, width, height, color_type)
        .map_err(|e| ConvertError::Encode(e.to_string()))?;

    fs::write(dest, &encoded).map_err(|e| {
        // Don't leave a truncated JPEG behind
        let _ = fs::remove_file(dest);
        ConvertError::Encode(format!("failed to write {}: {}", dest.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ColorType;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hdr-thumb-writer-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn thumbnail(width: usize, height: usize, channels: usize, value: u8) -> ThumbnailImage {
        ThumbnailImage {
            width,
            height,
            channels,
            samples: vec![value; width * height * channels],
        }
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path(Path::new("scene.exr")).unwrap(), PathBuf::from("scene.jpg"));
        assert_eq!(output_path(Path::new("photo.hdr")).unwrap(), PathBuf::from("photo.jpg"));
        assert_eq!(
            output_path(Path::new("/shots/v1.0/photo.hdr")).unwrap(),
            PathBuf::from("/shots/v1.0/photo.jpg")
        );
        assert_eq!(output_path(Path::new("a.b.exr")).unwrap(), PathBuf::from("a.b.jpg"));
    }

    #[test]
    fn test_output_path_rejects_other_extension_lengths() {
        for input in ["noext", "image.jpeg", "image.tx", "image.", "dir.abc/file"] {
            assert_eq!(
                output_path(Path::new(input)),
                Err(ConvertError::OutputPath(PathBuf::from(input))),
                "{} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_encodable_pixels_drops_alpha() {
        let rgba = ThumbnailImage {
            width: 2,
            height: 1,
            channels: 4,
            samples: vec![1, 2, 3, 255, 4, 5, 6, 128],
        };
        let (pixels, color) = encodable_pixels(&rgba).unwrap();
        assert_eq!(color, ExtendedColorType::Rgb8);
        assert_eq!(&pixels[..], &[1, 2, 3, 4, 5, 6]);

        let luma_alpha = ThumbnailImage {
            width: 2,
            height: 1,
            channels: 2,
            samples: vec![9, 255, 7, 0],
        };
        let (pixels, color) = encodable_pixels(&luma_alpha).unwrap();
        assert_eq!(color, ExtendedColorType::L8);
        assert_eq!(&pixels[..], &[9, 7]);
    }

    #[test]
    fn test_encodable_pixels_rejects_odd_channel_counts() {
        let five = thumbnail(1, 1, 5, 0);
        assert!(matches!(encodable_pixels(&five), Err(ConvertError::Encode(_))));
    }

    #[test]
    fn test_write_rgb_jpeg() {
        let dir = scratch_dir("rgb");
        let dest = dir.join("grey.jpg");
        write_jpeg(&thumbnail(64, 32, 3, 186), &dest).unwrap();

        let written = image::open(&dest).unwrap();
        assert_eq!((written.width(), written.height()), (64, 32));
        assert_eq!(written.color(), ColorType::Rgb8);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_write_rgba_jpeg_as_rgb() {
        let dir = scratch_dir("rgba");
        let dest = dir.join("black.jpg");
        write_jpeg(&thumbnail(10, 10, 4, 0), &dest).unwrap();

        let written = image::open(&dest).unwrap();
        assert_eq!((written.width(), written.height()), (10, 10));
        assert_eq!(written.color(), ColorType::Rgb8);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_write_empty_thumbnail_fails_without_output() {
        let dir = scratch_dir("empty");
        let dest = dir.join("flat.jpg");

        let result = write_jpeg(&thumbnail(1280, 0, 3, 0), &dest);
        assert!(matches!(result, Err(ConvertError::Encode(_))));
        assert!(!dest.exists());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dest = Path::new("/nonexistent/dir/out.jpg");
        let result = write_jpeg(&thumbnail(8, 8, 3, 0), dest);
        assert!(matches!(result, Err(ConvertError::Encode(_))));
    }
}
