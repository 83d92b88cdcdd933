use std::io::BufRead;

use crate::interpreter::{
    evaluator::binary::{BinaryOperator, eval_binary, token_to_binary_operator},
    lexer::TokenStream,
    parser::{core::CalcResult, unary::factorial},
    symbols::SymbolTable,
};

/// Evaluates addition and subtraction.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// The first token that is not `+` or `-` is put back. Running out of input
/// after a complete term ends the expression.
///
/// # Example
/// ```
/// use deskcalc::interpreter::{
///     lexer::TokenStream,
///     parser::binary::expression,
///     symbols::SymbolTable,
/// };
///
/// let mut tokens = TokenStream::from_source("2 + 3 * 4;");
/// let value = expression(&mut tokens, &mut SymbolTable::new()).unwrap();
/// assert_eq!(value, 14.0);
/// ```
pub fn expression<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let mut left = term(tokens, symbols)?;
    while let Some(token) = tokens.get()? {
        if let Some(op) = token_to_binary_operator(&token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let right = term(tokens, symbols)?;
            left = eval_binary(op, left, right, tokens.line())?;
            continue;
        }
        tokens.putback(token)?;
        break;
    }
    Ok(left)
}

/// Evaluates multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `term := exponential (("*" | "/" | "%") exponential)*`
///
/// # Errors
/// `DivisionByZero` when the divisor of `/` or `%` is zero.
pub fn term<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let mut left = exponential(tokens, symbols)?;
    while let Some(token) = tokens.get()? {
        if let Some(op) = token_to_binary_operator(&token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let right = exponential(tokens, symbols)?;
            left = eval_binary(op, left, right, tokens.line())?;
            continue;
        }
        tokens.putback(token)?;
        break;
    }
    Ok(left)
}

/// Evaluates powers and roots.
///
/// Both are left-associative: `a ^ b ^ c` is `(a ^ b) ^ c`, and `a R b` is
/// the real `b`-th root of `a`.
///
/// The rule is: `exponential := factorial (("^" | "R") factorial)*`
///
/// # Errors
/// The root errors of [`crate::interpreter::evaluator::binary::nth_root`].
///
/// # Example
/// ```
/// use deskcalc::interpreter::{
///     lexer::TokenStream,
///     parser::binary::exponential,
///     symbols::SymbolTable,
/// };
///
/// let mut tokens = TokenStream::from_source("2 ^ 3 ^ 2");
/// assert_eq!(exponential(&mut tokens, &mut SymbolTable::new()).unwrap(), 64.0);
/// ```
pub fn exponential<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let mut left = factorial(tokens, symbols)?;
    while let Some(token) = tokens.get()? {
        if let Some(op) = token_to_binary_operator(&token)
           && matches!(op, BinaryOperator::Pow | BinaryOperator::Root)
        {
            let right = factorial(tokens, symbols)?;
            left = eval_binary(op, left, right, tokens.line())?;
            continue;
        }
        tokens.putback(token)?;
        break;
    }
    Ok(left)
}
