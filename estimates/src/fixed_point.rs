use cast::{f64, i128};

use crate::{constants::MAX_DECIMALS, errors::EstimateError};

/// Convert a fixed-point number into a float
///
/// ### Arguments
/// * `value` - The fixed-point number
/// * `decimals` - The number of decimals `value` is scaled by
pub fn to_float(value: i128, decimals: u32) -> f64 {
    f64(value) / 10f64.powi(decimals as i32)
}

/// Convert a float into a fixed-point number, rounding to the nearest unit
///
/// ### Arguments
/// * `value` - The float to convert
/// * `decimals` - The number of decimals to scale the result by
///
/// ### Errors
/// If `decimals` is larger than 18 or the scaled value is not finite or does not fit in an i128
pub fn to_fixed(value: f64, decimals: u32) -> Result<i128, EstimateError> {
    if decimals > MAX_DECIMALS {
        return Err(EstimateError::InvalidDecimals);
    }
    let scaled = (value * 10f64.powi(decimals as i32)).round();
    i128(scaled).map_err(|_| EstimateError::ConversionError)
}
