/// The calculator context.
///
/// Owns one token stream and one symbol table and runs a single turn at a
/// time: skipping terminators, recognizing `exit` and `?`, evaluating a
/// statement, and resynchronizing after a failure.
pub mod calculator;
/// Operator semantics.
///
/// The arithmetic behind every operator, kept apart from the grammar so each
/// operation can be checked on plain numbers.
///
/// # Responsibilities
/// - Maps operator tokens to operators.
/// - Reports division by zero, invalid roots and invalid factorials.
pub mod evaluator;
/// The lexer module tokenizes calculator input.
///
/// The lexer reads the raw character stream line by line and hands out tokens
/// on demand: numbers, identifiers, keywords, operators and punctuation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Holds at most one pushed back token.
/// - Reports lexical errors for unrecognized characters.
/// - Skips to a statement terminator after an error.
pub mod lexer;
/// The parser module evaluates statements while reading them.
///
/// Each grammar level is a function of the token stream and the symbol table
/// that returns the level's value directly; no syntax tree is built.
///
/// # Responsibilities
/// - Implements operator precedence and associativity.
/// - Declares, assigns and looks up variables.
/// - Reports missing punctuation and unknown variables.
pub mod parser;
/// Variable storage.
///
/// The symbol table maps names to values and is seeded with the predefined
/// constants.
pub mod symbols;
