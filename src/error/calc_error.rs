use crate::error::{EvalError, LexError};

#[derive(Debug)]
/// Represents every way a calculator turn can end without a value.
pub enum CalcError {
    /// The character stream could not be tokenized.
    Lex(LexError),
    /// The statement could not be evaluated.
    Eval(EvalError),
    /// The input ended while a token was still expected.
    EndOfInput,
    /// Writing results, prompts or diagnostics failed.
    Io(std::io::Error),
}

impl CalcError {
    /// Whether a session may report this error, resynchronize and carry on.
    ///
    /// Bad characters and evaluation failures only spoil the current
    /// statement. A pushback into a full buffer means the grammar broke its
    /// own contract, and I/O failures mean the streams are gone; neither is
    /// recoverable.
    ///
    /// # Example
    /// ```
    /// use deskcalc::error::{CalcError, EvalError, LexError};
    ///
    /// assert!(CalcError::from(EvalError::DivisionByZero { line: 1 }).is_recoverable());
    /// assert!(!CalcError::from(LexError::PutbackFull { line: 1 }).is_recoverable());
    /// assert!(!CalcError::EndOfInput.is_recoverable());
    /// ```
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Eval(_) | Self::Lex(LexError::BadToken { .. }))
    }

    /// The process exit code for an error that escaped the session.
    ///
    /// `1` for user-caused failures (a statement that could not be evaluated
    /// or tokenized), `2` for everything else.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_recoverable() { 1 } else { 2 }
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
            Self::EndOfInput => write!(f, "Unexpected end of input."),
            Self::Io(e) => write!(f, "Failed to write output: {e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::EndOfInput => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<LexError> for CalcError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<EvalError> for CalcError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl From<std::io::Error> for CalcError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
