use std::io::BufRead;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::unary::eval_factorial,
        lexer::{Token, TokenStream},
        parser::{
            binary::expression,
            core::{CalcResult, expect, next_token},
        },
        symbols::SymbolTable,
    },
};

/// Evaluates a primary followed by any number of postfix `!`.
///
/// Factorials apply innermost first, so `3!!` is `(3!)!`.
///
/// Grammar: `factorial := primary ("!")*`
///
/// # Errors
/// - `InvalidFactorial` for negative or fractional operands.
/// - `Overflow` for results beyond `u64`.
///
/// # Example
/// ```
/// use deskcalc::interpreter::{
///     lexer::TokenStream,
///     parser::unary::factorial,
///     symbols::SymbolTable,
/// };
///
/// let mut tokens = TokenStream::from_source("3!!");
/// assert_eq!(factorial(&mut tokens, &mut SymbolTable::new()).unwrap(), 720.0);
/// ```
pub fn factorial<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let mut left = primary(tokens, symbols)?;
    while let Some(token) = tokens.get()? {
        if token == Token::Bang {
            left = eval_factorial(left, tokens.line())?;
            continue;
        }
        tokens.putback(token)?;
        break;
    }
    Ok(left)
}

/// Evaluates a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := "{" expression "}"
///              | "(" expression ")"
///              | number
///              | "-" primary
///              | "+" primary
///              | identifier "=" expression
///              | identifier
/// ```
///
/// # Errors
/// - `ExpectedToken` for a missing `)` or `}`, or a token that cannot start a
///   primary. The offending token is put back.
/// - `UnknownVariable` for a reference to, or assignment of, an undeclared
///   name.
/// - `CalcError::EndOfInput` if the input ends here.
pub fn primary<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    match next_token(tokens)? {
        Token::LBrace => {
            let value = expression(tokens, symbols)?;
            expect(tokens, &Token::RBrace, "'}'")?;
            Ok(value)
        },
        Token::LParen => {
            let value = expression(tokens, symbols)?;
            expect(tokens, &Token::RParen, "')'")?;
            Ok(value)
        },
        Token::Number(value) => Ok(value.into_inner()),
        Token::Minus => Ok(-primary(tokens, symbols)?),
        Token::Plus => primary(tokens, symbols),
        Token::Identifier(name) => variable(tokens, symbols, &name),
        token => {
            let found = token.to_string();
            tokens.putback(token)?;
            Err(EvalError::ExpectedToken { expected: "primary",
                                           found,
                                           line: tokens.line() }.into())
        },
    }
}

/// Evaluates a variable reference or an assignment to an existing variable.
///
/// The identifier has already been consumed. If `=` follows, the right-hand
/// expression is stored in the variable and returned; otherwise the variable's
/// current value is returned.
///
/// # Example
/// ```
/// use deskcalc::interpreter::{
///     lexer::TokenStream,
///     parser::unary::primary,
///     symbols::SymbolTable,
/// };
///
/// let mut symbols = SymbolTable::with_constants();
/// let mut tokens = TokenStream::from_source("pi = 3");
/// assert_eq!(primary(&mut tokens, &mut symbols).unwrap(), 3.0);
/// assert_eq!(symbols.get("pi"), Some(3.0));
/// ```
fn variable<R>(tokens: &mut TokenStream<R>,
               symbols: &mut SymbolTable,
               name: &str)
               -> CalcResult<f64>
    where R: BufRead
{
    let unknown = |line| EvalError::UnknownVariable { name: name.to_string(),
                                                      line };

    match tokens.get()? {
        Some(Token::Equals) => {
            if !symbols.is_declared(name) {
                return Err(unknown(tokens.line()).into());
            }
            let value = expression(tokens, symbols)?;
            Ok(symbols.set(name, value, tokens.line())?)
        },
        lookahead => {
            if let Some(token) = lookahead {
                tokens.putback(token)?;
            }
            symbols.get(name)
                   .ok_or_else(|| unknown(tokens.line()).into())
        },
    }
}
