use std::io::BufRead;

use crate::{
    error::{CalcError, EvalError},
    interpreter::{
        lexer::{Token, TokenStream},
        parser::binary::expression,
        symbols::SymbolTable,
    },
};

/// Result type used by the grammar functions.
///
/// A grammar level either computes a value or stops with the lexical,
/// evaluation or end-of-input condition that prevented it.
pub type CalcResult<T> = Result<T, CalcError>;

/// Evaluates one statement.
///
/// This is the entry point for a single calculator turn. A statement starting
/// with `let` is a declaration; anything else is an expression.
///
/// Grammar: `statement := "let" declaration | expression`
///
/// The token that ends the statement (usually `;`) is left in the stream.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the statement.
/// - `symbols`: Variables visible to, and declared by, the statement.
///
/// # Returns
/// The value of the expression, or the value assigned by the declaration.
///
/// # Example
/// ```
/// use deskcalc::interpreter::{
///     lexer::TokenStream,
///     parser::core::statement,
///     symbols::SymbolTable,
/// };
///
/// let mut tokens = TokenStream::from_source("let v = 5; v + 1;");
/// let mut symbols = SymbolTable::new();
///
/// assert_eq!(statement(&mut tokens, &mut symbols).unwrap(), 5.0);
/// tokens.get().unwrap(); // the terminating ';'
/// assert_eq!(statement(&mut tokens, &mut symbols).unwrap(), 6.0);
/// ```
pub fn statement<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let token = next_token(tokens)?;
    if token == Token::Let {
        return declaration(tokens, symbols);
    }
    tokens.putback(token)?;
    expression(tokens, symbols)
}

/// Evaluates a declaration; `let` has already been consumed.
///
/// Grammar: `declaration := identifier "=" expression`
///
/// Declaring an existing name overwrites its value.
///
/// # Errors
/// - `ExpectedIdentifier` if no name follows `let`.
/// - `ExpectedToken` if `=` is missing.
/// - Propagates any errors from the initializer.
pub fn declaration<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let name = match next_token(tokens)? {
        Token::Identifier(name) => name,
        token => {
            let found = token.to_string();
            tokens.putback(token)?;
            return Err(EvalError::ExpectedIdentifier { found,
                                                       line: tokens.line() }.into());
        },
    };

    expect(tokens, &Token::Equals, "'='")?;

    let value = expression(tokens, symbols)?;
    Ok(symbols.define(&name, value))
}

/// Reads the next token, treating the end of input as an error.
///
/// Used wherever the grammar cannot finish without another token.
///
/// # Errors
/// - `CalcError::EndOfInput` if the source is exhausted.
/// - Propagates lexical errors.
pub(in crate::interpreter) fn next_token<R>(tokens: &mut TokenStream<R>) -> CalcResult<Token>
    where R: BufRead
{
    tokens.get()?.ok_or(CalcError::EndOfInput)
}

/// Consumes the next token, which must equal `expected`.
///
/// On a mismatch the offending token is put back, so resynchronization can
/// still find a terminator that ended the broken statement.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `expected`: The required token.
/// - `description`: How `expected` is named in the error message.
///
/// # Errors
/// `ExpectedToken` if a different token was found.
pub(in crate::interpreter::parser) fn expect<R>(tokens: &mut TokenStream<R>,
                                                expected: &Token,
                                                description: &'static str)
                                                -> CalcResult<()>
    where R: BufRead
{
    let token = next_token(tokens)?;
    if token == *expected {
        return Ok(());
    }

    let found = token.to_string();
    tokens.putback(token)?;
    Err(EvalError::ExpectedToken { expected: description,
                                   found,
                                   line: tokens.line() }.into())
}
