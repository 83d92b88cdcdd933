use std::collections::HashMap;

use crate::error::EvalError;

/// The ratio of a circle's circumference to its diameter, as the calculator
/// predefines it.
pub const PI: f64 = 3.141_592_653_5;
/// Euler's number, as the calculator predefines it.
pub const E: f64 = 2.718_281_828_4;
/// Boltzmann's constant in J/K.
pub const BOLTZMANN: f64 = 1.380_648_52e-23;

/// Maps variable names to their values.
///
/// Names are unique. Declaring an existing name overwrites its value in place;
/// the table never shrinks.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    variables: HashMap<String, f64>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the predefined constants `pi`, `e` and `k`.
    ///
    /// # Example
    /// ```
    /// use deskcalc::interpreter::symbols::{BOLTZMANN, SymbolTable};
    ///
    /// let table = SymbolTable::with_constants();
    /// assert_eq!(table.get("k"), Some(BOLTZMANN));
    /// assert!(table.is_declared("pi"));
    /// assert!(!table.is_declared("tau"));
    /// ```
    #[must_use]
    pub fn with_constants() -> Self {
        let mut table = Self::new();
        table.define("pi", PI);
        table.define("e", E);
        table.define("k", BOLTZMANN);
        table
    }

    /// Returns the value of `name`, or `None` if it was never declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Whether `name` has been declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Declares `name` with `value`, overwriting any previous value.
    ///
    /// Returns the stored value.
    ///
    /// # Example
    /// ```
    /// use deskcalc::interpreter::symbols::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// table.define("v", 5.0);
    /// table.define("v", 9.0);
    ///
    /// assert_eq!(table.get("v"), Some(9.0));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn define(&mut self, name: &str, value: f64) -> f64 {
        self.variables.insert(name.to_string(), value);
        value
    }

    /// Assigns `value` to an already declared variable.
    ///
    /// # Errors
    /// Returns `EvalError::UnknownVariable` if `name` was never declared; the
    /// table is left unchanged.
    ///
    /// # Example
    /// ```
    /// use deskcalc::{error::EvalError, interpreter::symbols::SymbolTable};
    ///
    /// let mut table = SymbolTable::with_constants();
    /// assert_eq!(table.set("pi", 3.0, 1), Ok(3.0));
    /// assert!(matches!(table.set("tau", 6.28, 1), Err(EvalError::UnknownVariable { .. })));
    /// ```
    pub fn set(&mut self, name: &str, value: f64, line: usize) -> Result<f64, EvalError> {
        match self.variables.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(value)
            },
            None => Err(EvalError::UnknownVariable { name: name.to_string(),
                                                     line }),
        }
    }

    /// The number of declared variables, constants included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
