/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// within the exactly representable range, and not fractional.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, negative, out-of-range, or fractional
/// values.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `error`: The error to return if the conversion is not lossless.
///
/// ## Example
/// ```
/// use deskcalc::util::num::f64_to_u64_checked;
///
/// assert_eq!(f64_to_u64_checked(7.0, "bad"), Ok(7));
/// assert_eq!(f64_to_u64_checked(-5.0, "bad"), Err("bad"));
/// assert_eq!(f64_to_u64_checked(1.23, "bad"), Err("bad"));
/// assert_eq!(f64_to_u64_checked(f64::NAN, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked<E>(value: f64, error: E) -> Result<u64, E> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return Err(error);
    }
    if value.fract() != 0.0 {
        return Err(error);
    }
    Ok(value as u64)
}

/// Safely converts an `f64` to `i32` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, out-of-range, or fractional values.
///
/// ## Example
/// ```
/// use deskcalc::util::num::f64_to_i32_checked;
///
/// assert_eq!(f64_to_i32_checked(-3.0, ()), Ok(-3));
/// assert_eq!(f64_to_i32_checked(0.5, ()), Err(()));
/// assert_eq!(f64_to_i32_checked(1e12, ()), Err(()));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i32_checked<E>(value: f64, error: E) -> Result<i32, E> {
    if !value.is_finite() || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(error);
    }
    if value.fract() != 0.0 {
        return Err(error);
    }
    Ok(value as i32)
}
