#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a statement.
pub enum EvalError {
    /// Referenced or assigned a variable that was never declared.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// What the grammar needed at this point, e.g. `')'`.
        expected: &'static str,
        /// A description of the token that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A declaration did not name a variable after `let`.
    ExpectedIdentifier {
        /// A description of the token that was found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division or remainder by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Asked for an even root of a negative number.
    NoRealRoot {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The degree of a root was negative.
    NegativeRootDegree {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The degree of a root was zero or fractional.
    InvalidRootDegree {
        /// The degree that was supplied.
        degree: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The degree of a root was an integer too large to compute with.
    RootDegreeTooLarge {
        /// The degree that was supplied.
        degree: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Factorial was applied to a negative or fractional value.
    InvalidFactorial {
        /// The operand that was supplied.
        operand: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An integer computation exceeded its range.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => write!(f,
                                                           "Error on line {line}: primary expected, '{name}' is not declared."),
            Self::ExpectedToken { expected,
                                  found,
                                  line, } => {
                write!(f, "Error on line {line}: {expected} expected, found {found}.")
            },
            Self::ExpectedIdentifier { found, line } => write!(f,
                                                               "Error on line {line}: name expected in declaration, found {found}."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: divide by zero."),
            Self::NoRealRoot { line } => {
                write!(f, "Error on line {line}: no real root of a negative number for an even degree.")
            },
            Self::NegativeRootDegree { line } => {
                write!(f, "Error on line {line}: only positive powers allowed for roots.")
            },
            Self::InvalidRootDegree { degree, line } => write!(f,
                                                               "Error on line {line}: root degree must be a positive integer, found {degree}."),
            Self::RootDegreeTooLarge { degree, line } => {
                write!(f, "Error on line {line}: root degree {degree} is out of range.")
            },
            Self::InvalidFactorial { operand, line } => write!(f,
                                                               "Error on line {line}: factorial requires a non-negative integer, found {operand}."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for EvalError {}
