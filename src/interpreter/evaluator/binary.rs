use crate::{
    error::EvalError,
    interpreter::{evaluator::EvalResult, lexer::Token},
    util::num::f64_to_i32_checked,
};

/// Largest accepted `|guess^n - radicand|` when approximating a root.
pub const ROOT_TOLERANCE: f64 = 1e-4;
/// Upper bound on Newton steps; guards radicands too large for
/// [`ROOT_TOLERANCE`] to be reachable in `f64`.
pub const ROOT_MAX_ITERATIONS: usize = 10_000;

/// The binary operators of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Real nth root (`R`)
    Root,
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not a binary operator.
///
/// # Example
/// ```
/// use deskcalc::interpreter::{
///     evaluator::binary::{BinaryOperator, token_to_binary_operator},
///     lexer::Token,
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Root), Some(BinaryOperator::Root));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Root => Some(BinaryOperator::Root),
        _ => None,
    }
}

/// Applies a binary operator to two operands.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`, `right`: The operands, in source order.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// - `DivisionByZero` for `/` and `%` with a zero divisor.
/// - The errors of [`nth_root`] for `R`.
///
/// # Example
/// ```
/// use deskcalc::{
///     error::EvalError,
///     interpreter::evaluator::binary::{BinaryOperator, eval_binary},
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Pow, 2.0, 10.0, 1), Ok(1024.0));
/// assert_eq!(eval_binary(BinaryOperator::Mod, -7.0, 3.0, 1), Ok(-1.0));
/// assert_eq!(eval_binary(BinaryOperator::Div, 1.0, 0.0, 4),
///            Err(EvalError::DivisionByZero { line: 4 }));
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, line: usize) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero { line });
            }
            Ok(left / right)
        },
        BinaryOperator::Mod => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero { line });
            }
            Ok(left % right)
        },
        BinaryOperator::Pow => Ok(left.powf(right)),
        BinaryOperator::Root => nth_root(left, right, line),
    }
}

/// Computes the real `degree`-th root of `radicand` with Newton's method.
///
/// Works on `|radicand|` starting from a guess of `1.0`, using the update
/// `((n - 1) * guess + |radicand| / guess^(n - 1)) / n`, which stays finite
/// while `guess^n` would overflow. Stops once `|guess^n - |radicand||` is at
/// most [`ROOT_TOLERANCE`], once a step no longer moves the guess, or after
/// [`ROOT_MAX_ITERATIONS`] steps. If a step leaves the finite range the last
/// finite guess is kept. The sign is restored for odd degrees.
///
/// # Errors
/// - `NegativeRootDegree` if `degree < 0`.
/// - `InvalidRootDegree` if `degree` is zero, fractional or not finite.
/// - `RootDegreeTooLarge` if `degree` is an integer beyond `i32::MAX`.
/// - `NoRealRoot` if `radicand < 0` and `degree` is even.
///
/// # Example
/// ```
/// use deskcalc::{error::EvalError, interpreter::evaluator::binary::nth_root};
///
/// assert!((nth_root(8.0, 3.0, 1).unwrap() - 2.0).abs() < 1e-4);
/// assert!((nth_root(-8.0, 3.0, 1).unwrap() + 2.0).abs() < 1e-4);
/// assert!((nth_root(-2.0, 3.0, 1).unwrap() + 2f64.cbrt()).abs() < 1e-4);
/// assert!((nth_root(1e200, 2.0, 1).unwrap() / 1e100 - 1.0).abs() < 1e-9);
/// assert_eq!(nth_root(-4.0, 2.0, 1), Err(EvalError::NoRealRoot { line: 1 }));
/// ```
pub fn nth_root(radicand: f64, degree: f64, line: usize) -> EvalResult<f64> {
    if degree < 0.0 {
        return Err(EvalError::NegativeRootDegree { line });
    }
    if degree == 0.0 || !degree.is_finite() || degree.fract() != 0.0 {
        return Err(EvalError::InvalidRootDegree { degree: degree.to_string(),
                                                  line });
    }

    let n = f64_to_i32_checked(degree,
                               EvalError::RootDegreeTooLarge { degree: degree.to_string(),
                                                               line })?;
    if radicand < 0.0 && n % 2 == 0 {
        return Err(EvalError::NoRealRoot { line });
    }
    if !radicand.is_finite() {
        return Ok(radicand);
    }

    let target = radicand.abs();
    let degree = f64::from(n);
    let mut guess = 1.0_f64;
    for _ in 0..ROOT_MAX_ITERATIONS {
        if (guess.powi(n) - target).abs() <= ROOT_TOLERANCE {
            break;
        }
        let next = ((degree - 1.0) * guess + target / guess.powi(n - 1)) / degree;
        if !next.is_finite() {
            break;
        }
        let settled = (next - guess).abs() <= f64::EPSILON * guess.abs();
        guess = next;
        if settled {
            break;
        }
    }

    Ok(if radicand < 0.0 { -guess } else { guess })
}
