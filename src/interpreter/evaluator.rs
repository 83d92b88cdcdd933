use crate::error::EvalError;

/// Binary operator evaluation.
///
/// Maps operator tokens to [`binary::BinaryOperator`] and applies them,
/// including the checked operations: division, remainder and nth root.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements factorial over non-negative integer operands.
pub mod unary;

/// Result type used by the evaluator.
///
/// All operator functions return either a value of type `T` or an `EvalError`
/// describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;
