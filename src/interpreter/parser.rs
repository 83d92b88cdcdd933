/// Statement-level grammar and shared helpers.
///
/// Holds the entry point called once per turn, variable declarations, and the
/// token helpers every grammar level uses.
pub mod core;

/// Binary operator levels.
///
/// Sums, products and exponentials, each a left-associative chain reduced
/// while it is read.
pub mod binary;

/// Postfix factorial and primary expressions.
///
/// Literals, signs, groups, variable references and assignments.
pub mod unary;
