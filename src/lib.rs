//! # deskcalc
//!
//! deskcalc is an interactive desk calculator written in Rust.
//! It reads arithmetic statements from a line-oriented stream, evaluates them
//! with the usual operator precedence while reading, and keeps named variables
//! between statements.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcError,
    interpreter::{
        calculator::{Calculator, Turn},
        parser::core::CalcResult,
    },
};

/// Provides unified error types for lexing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing or
/// evaluating a statement, and the combined error a calculator turn returns.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Attaches line numbers to every message.
/// - Decides which failures a session can recover from, and the exit code of
///   those it cannot.
pub mod error;
/// Orchestrates the evaluation of calculator input.
///
/// This module ties together the token stream, the direct-evaluating parser,
/// the operator semantics and the symbol table.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, symbols.
/// - Provides the per-turn entry point used by drivers.
pub mod interpreter;
/// The read-eval-print loop.
///
/// Prints the greeting, prompts, results and help, reports failing statements
/// and resynchronizes the input after them.
pub mod session;
/// General utilities for safe numeric conversion.
///
/// Converts floating-point values to integers without silent truncation.
pub mod util;

/// Evaluates every statement in `source` and returns their values.
///
/// Help requests are skipped. Evaluation stops at `exit` or at the end of the
/// input; a final statement does not need a terminating `;`.
///
/// # Errors
/// Returns the first lexical or evaluation error; later statements are not
/// evaluated.
///
/// # Examples
/// ```
/// use deskcalc::get_results;
///
/// let values = get_results("let r = 2; pi * r ^ 2; 5!").unwrap();
/// assert_eq!(values[0], 2.0);
/// assert!((values[1] - 12.566_370_614).abs() < 1e-9);
/// assert_eq!(values[2], 120.0);
///
/// // 'y' is not defined.
/// assert!(get_results("let x = y + 1;").is_err());
/// ```
pub fn get_results(source: &str) -> CalcResult<Vec<f64>> {
    let mut calculator = Calculator::from_source(source);
    let mut results = Vec::new();

    loop {
        match calculator.read_turn() {
            Ok(Turn::Value(value)) => results.push(value),
            Ok(Turn::Help) => {},
            Ok(Turn::Quit) | Err(CalcError::EndOfInput) => return Ok(results),
            Err(e) => return Err(e),
        }
    }
}
