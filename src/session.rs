use std::io::{BufRead, Write};

use crate::{
    error::CalcError,
    interpreter::{
        calculator::{Calculator, Turn},
        parser::core::CalcResult,
    },
};

/// Printed before every turn.
pub const PROMPT: &str = "> ";
/// Printed in front of every result.
pub const RESULT: &str = "= ";

/// Printed once when an interactive session starts.
pub const GREETING: &str = "\
Welcome to deskcalc.
Enter expressions using floating-point numbers and end each one with ';'.
Type '?' for help and 'exit' to quit.
";

/// Printed whenever the user types `?`.
pub const HELP: &str = "\
Operators, from loosest to tightest binding:
  a + b   a - b        sum, difference
  a * b   a / b   a % b product, quotient, remainder
  a ^ b   a R b        power, real b-th root of a
  a!                   factorial of a non-negative integer (up to 20!)
  -a   +a   (a)   {a}  sign, grouping
Variables:
  let name = expression;   declare, or overwrite, a variable
  name = expression;       assign to a declared variable
  pi, e and k (Boltzmann's constant) are predefined.
End every statement with ';'. Type 'exit' to quit.
";

/// A read-eval-print loop around a [`Calculator`].
///
/// Results go to `out`, diagnostics to `err`. A failing statement is reported,
/// the input is skipped up to the next `;`, and the loop carries on.
///
/// # Example
/// ```
/// use deskcalc::session::Session;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// Session::new("let v = 5; v + 1; x; 2 ^ 10;".as_bytes(), &mut out, &mut err).quiet(true)
///                                                                         .run()
///                                                                         .unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "= 5\n= 6\n= 1024\n");
/// assert!(String::from_utf8(err).unwrap().contains("'x' is not declared"));
/// ```
pub struct Session<R, W, E> {
    calculator: Calculator<R>,
    out:        W,
    err:        E,
    quiet:      bool,
}

impl<R, W, E> Session<R, W, E>
    where R: BufRead,
          W: Write,
          E: Write
{
    /// Creates an interactive session reading from `source`.
    pub fn new(source: R, out: W, err: E) -> Self {
        Self { calculator: Calculator::new(source),
               out,
               err,
               quiet: false }
    }

    /// Suppresses the greeting and the prompts, leaving only results,
    /// help text and diagnostics.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The calculator driven by this session.
    pub const fn calculator(&self) -> &Calculator<R> {
        &self.calculator
    }

    /// Runs turns until `exit` or the end of the input.
    ///
    /// # Errors
    /// Returns the first error the session cannot recover from: a pushback
    /// into a full buffer, or a failure of one of the streams.
    pub fn run(&mut self) -> CalcResult<()> {
        if !self.quiet {
            write!(self.out, "{GREETING}")?;
        }

        loop {
            if !self.quiet {
                write!(self.out, "{PROMPT}")?;
                self.out.flush()?;
            }

            match self.calculator.read_turn() {
                Ok(Turn::Value(value)) => writeln!(self.out, "{RESULT}{value}")?,
                Ok(Turn::Help) => write!(self.out, "{HELP}")?,
                Ok(Turn::Quit) | Err(CalcError::EndOfInput) => return Ok(()),
                Err(e) if e.is_recoverable() => {
                    writeln!(self.err, "{e}")?;
                    self.calculator.clean_up_mess()?;
                },
                Err(e) => return Err(e),
            }
        }
    }
}
