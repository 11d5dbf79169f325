//! Checked numeric conversions for pixel and screen coordinates

use crate::{Error, Result};

/// Safely convert u32 to i32 with overflow checking
///
/// # Errors
///
/// Returns an error if the value exceeds i32::MAX
pub fn u32_to_i32(value: u32) -> Result<i32> {
    value
        .try_into()
        .map_err(|_| Error::InvalidInput(format!("Value {value} too large to fit in i32")))
}

/// Convert u32 to i32, saturating at i32::MAX
#[must_use]
pub fn u32_to_i32_saturating(value: u32) -> i32 {
    u32_to_i32(value).unwrap_or(i32::MAX)
}

/// Safely convert f64 to i32 with bounds checking, truncating toward zero
///
/// # Errors
///
/// Returns an error if the value is not finite or outside i32 range
#[allow(clippy::cast_possible_truncation)] // Truncation after bounds check is safe
pub fn f64_to_i32(value: f64) -> Result<i32> {
    if value.is_finite() && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
        Ok(value as i32)
    } else {
        Err(Error::InvalidInput(format!(
            "Value {value} cannot be safely converted to i32"
        )))
    }
}

/// Round f64 to the nearest i32, saturating at the i32 bounds
///
/// NaN maps to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // `as` saturates for out-of-range floats
pub fn f64_round_to_i32(value: f64) -> i32 {
    value.round() as i32
}

/// Clamp i32 into the i16 range used by X11 coordinates
#[must_use]
pub fn i32_to_i16_clamp(value: i32) -> i16 {
    i16::try_from(value).unwrap_or(if value < 0 { i16::MIN } else { i16::MAX })
}
