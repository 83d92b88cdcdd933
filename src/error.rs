/// Lexical errors.
///
/// Raised by the token stream when the character source cannot be turned into
/// tokens: unrecognized characters, a pushback into a full buffer, or a
/// failing reader.
pub mod lex_error;
/// Evaluation errors.
///
/// Raised by the grammar functions while computing a statement: unknown
/// variables, missing punctuation, division by zero, invalid root or factorial
/// arguments.
pub mod eval_error;
/// The error type shared by every stage of a calculator turn.
///
/// Wraps lexical and evaluation errors, the end-of-input condition, and output
/// failures, and decides which of them a session can recover from.
pub mod calc_error;

pub use calc_error::CalcError;
pub use eval_error::EvalError;
pub use lex_error::LexError;
