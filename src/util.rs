/// Numeric conversion helpers.
///
/// This module provides safe functions for converting floating-point values to
/// integer types without silent truncation. The factorial and root operators
/// use them to decide whether an operand is an integer count.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or the caller's error if the value is out of range or not an
/// integer.
pub mod num;
