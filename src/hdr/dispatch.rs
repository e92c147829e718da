/// Input format detection
///
/// Routes a path to a decoder by the text after the final `.` of its file name.
/// Matching is exact: `photo.HDR` is not routed.

use std::path::Path;

/// Decoders this tool knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Radiance RGBE (`.hdr`)
    Radiance,
    /// OpenEXR (`.exr`)
    OpenExr,
}

/// Extension of the file name (text after the final dot), if any
pub fn extension(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.rfind('.').map(|dot| &name[dot + 1..])
}

/// Pick the decoder for a path, or `None` if the file should be skipped
pub fn route(path: &Path) -> Option<SourceFormat> {
    match extension(path)? {
        "hdr" => Some(SourceFormat::Radiance),
        "exr" => Some(SourceFormat::OpenExr),
        _ => None,
    }
}
