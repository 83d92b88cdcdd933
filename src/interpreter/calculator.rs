use std::io::{BufRead, Cursor};

use crate::interpreter::{
    lexer::{Token, TokenStream},
    parser::core::{CalcResult, next_token, statement},
    symbols::SymbolTable,
};

/// What one turn of the calculator produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Turn {
    /// A statement was evaluated to this value.
    Value(f64),
    /// The user asked for help with `?`.
    Help,
    /// The user typed `exit`.
    Quit,
}

/// Stores the state of one calculator session.
///
/// The calculator owns the token stream it reads from and the symbol table its
/// statements read and declare. Independent calculators share nothing.
///
/// ## Usage
///
/// A driver calls [`Calculator::read_turn`] repeatedly. When a turn fails with
/// a recoverable error it reports the error and calls
/// [`Calculator::clean_up_mess`] before the next turn.
pub struct Calculator<R> {
    /// The token stream statements are read from.
    pub tokens:  TokenStream<R>,
    /// The declared variables, starting with `pi`, `e` and `k`.
    pub symbols: SymbolTable,
}

impl Calculator<Cursor<String>> {
    /// Creates a calculator reading from an in-memory string.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        Self { tokens:  TokenStream::from_source(source),
               symbols: SymbolTable::with_constants(), }
    }
}

impl<R: BufRead> Calculator<R> {
    /// Creates a calculator reading from `source`, with the predefined
    /// constants declared.
    #[must_use]
    pub fn new(source: R) -> Self {
        Self { tokens:  TokenStream::new(source),
               symbols: SymbolTable::with_constants(), }
    }

    /// Evaluates one statement at the current position.
    ///
    /// See [`crate::interpreter::parser::core::statement`].
    pub fn statement(&mut self) -> CalcResult<f64> {
        statement(&mut self.tokens, &mut self.symbols)
    }

    /// Runs one turn of the calculator.
    ///
    /// Leading `;` tokens are discarded. `exit` ends the session and `?`
    /// requests help; anything else is evaluated as a statement.
    ///
    /// # Errors
    /// - `CalcError::EndOfInput` once the input is exhausted.
    /// - Any lexical or evaluation error of the statement.
    ///
    /// # Example
    /// ```
    /// use deskcalc::interpreter::calculator::{Calculator, Turn};
    ///
    /// let mut calculator = Calculator::from_source("1 + 1; ;; ? exit; 5;");
    /// assert_eq!(calculator.read_turn().unwrap(), Turn::Value(2.0));
    /// assert_eq!(calculator.read_turn().unwrap(), Turn::Help);
    /// assert_eq!(calculator.read_turn().unwrap(), Turn::Quit);
    /// ```
    pub fn read_turn(&mut self) -> CalcResult<Turn> {
        let mut token = next_token(&mut self.tokens)?;
        while token == Token::Print {
            token = next_token(&mut self.tokens)?;
        }

        match token {
            Token::Quit => Ok(Turn::Quit),
            Token::Help => Ok(Turn::Help),
            token => {
                self.tokens.putback(token)?;
                Ok(Turn::Value(self.statement()?))
            },
        }
    }

    /// Discards input up to and including the next `;`.
    ///
    /// Called after a failed turn so the next turn starts at a fresh
    /// statement.
    ///
    /// # Errors
    /// Returns a lexical error only if reading the source fails.
    pub fn clean_up_mess(&mut self) -> CalcResult<()> {
        Ok(self.tokens.ignore(&Token::Print)?)
    }
}
