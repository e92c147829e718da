/// Tone-mapping utilities
///
/// This module converts linear floating-point HDR samples into 8-bit
/// display values using a fixed gamma curve:
/// - No exposure control
/// - No highlight compression beyond hard clamping

/// Display gamma used for every conversion
pub const GAMMA: f32 = 2.2;

/// Apply display gamma to a linear sample
pub fn gamma_correct(value: f32) -> f32 {
    value.powf(1.0 / GAMMA)
}

/// Map one linear channel value to an 8-bit channel value
///
/// The gamma-corrected value is scaled to [0, 255] and truncated toward zero.
/// Negative inputs and NaN map to 0, anything at or above 1.0 maps to 255.
pub fn tone_map(value: f32) -> u8 {
    // powf on a negative base is NaN; `!(x > 0)` also catches NaN inputs
    if !(value > 0.0) {
        return 0;
    }

    let scaled = gamma_correct(value) * 255.0;
    scaled.clamp(0.0, 255.0) as u8
}
