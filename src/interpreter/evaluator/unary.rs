use crate::{
    error::EvalError,
    interpreter::evaluator::EvalResult,
    util::num::f64_to_u64_checked,
};

/// Computes `k!` with checked arithmetic.
///
/// By convention `0! = 1! = 1`.
///
/// # Errors
/// Returns `EvalError::Overflow` once the product no longer fits a `u64`,
/// which happens for every `k` above 20.
///
/// # Example
/// ```
/// use deskcalc::{error::EvalError, interpreter::evaluator::unary::factorial};
///
/// assert_eq!(factorial(0, 1), Ok(1));
/// assert_eq!(factorial(5, 1), Ok(120));
/// assert_eq!(factorial(20, 1), Ok(2_432_902_008_176_640_000));
/// assert_eq!(factorial(21, 3), Err(EvalError::Overflow { line: 3 }));
/// ```
pub fn factorial(k: u64, line: usize) -> EvalResult<u64> {
    (2..=k).try_fold(1u64, |acc, i| acc.checked_mul(i).ok_or(EvalError::Overflow { line }))
}

/// Applies the postfix factorial operator to a calculator value.
///
/// The operand has to be a non-negative integer; the product is accumulated
/// as an integer and handed back as `f64`.
///
/// # Errors
/// - `InvalidFactorial` for negative, fractional or non-finite operands.
/// - `Overflow` when the result exceeds `u64`.
#[allow(clippy::cast_precision_loss)]
pub fn eval_factorial(value: f64, line: usize) -> EvalResult<f64> {
    let k = f64_to_u64_checked(value,
                               EvalError::InvalidFactorial { operand: value.to_string(),
                                                             line })?;
    Ok(factorial(k, line)? as f64)
}
