use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    error::VarError,
    interpreter::{evaluator::function::core::is_builtin_function, lexer::is_identifier},
};

/// Constants every table starts with, in listing order.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// One row of [`SymbolTable::list`].
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolEntry {
    /// Lower-cased name.
    pub name:        String,
    /// Current value.
    pub value:       f64,
    /// `true` for seeded constants, which can never be removed.
    pub is_constant: bool,
}

/// Stores the names an expression can refer to.
///
/// The table has two layers: the constants `pi` and `e`, fixed at
/// construction, and user variables that are added and removed explicitly.
/// A name lives in at most one layer; defining a user variable with a
/// constant's name is refused up front, so lookups never have to pick a
/// winner.
///
/// All names are stored lower-cased, matching the tokenizer.
///
/// ## Usage
///
/// The table is created once per calculator session. Evaluation only needs
/// `&SymbolTable`; `define` and `undefine` need `&mut SymbolTable`, so the
/// borrow checker keeps mutation and evaluation apart.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    constants: Vec<(String, f64)>,
    variables: BTreeMap<String, f64>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Creates a table holding only the constants.
    #[must_use]
    pub fn new() -> Self {
        Self { constants: CONSTANTS.iter()
                                   .map(|(name, value)| ((*name).to_string(), *value))
                                   .collect(),
               variables: BTreeMap::new(), }
    }

    /// Defines a new user variable.
    ///
    /// The name is trimmed and lower-cased first.
    ///
    /// # Errors
    /// - [`VarError::InvalidName`] if the name is empty or does not lex as a
    ///   single identifier (`2`, `2x`, `1e5` and `a+b` are all rejected).
    /// - [`VarError::ReservedName`] if the name is a constant, a builtin
    ///   function, or an existing variable. Redefining requires `undefine`
    ///   first.
    /// - [`VarError::InvalidValue`] if the value is infinite or NaN.
    ///
    /// # Example
    /// ```
    /// use infix::{error::VarError, interpreter::symbols::SymbolTable};
    ///
    /// let mut symbols = SymbolTable::new();
    /// symbols.define("Rate", 0.25).unwrap();
    /// assert_eq!(symbols.lookup("rate"), Some(0.25));
    ///
    /// assert!(matches!(symbols.define("pi", 1.0),
    ///                  Err(VarError::ReservedName { .. })));
    /// assert!(matches!(symbols.define("2", 5.0),
    ///                  Err(VarError::InvalidName { .. })));
    /// ```
    pub fn define(&mut self, name: &str, value: f64) -> Result<(), VarError> {
        let name = normalize(name);

        if !is_identifier(&name) {
            return Err(VarError::InvalidName { name });
        }
        if self.is_constant(&name)
           || is_builtin_function(&name)
           || self.variables.contains_key(&name)
        {
            return Err(VarError::ReservedName { name });
        }
        if !value.is_finite() {
            return Err(VarError::InvalidValue { value: value.to_string() });
        }

        debug!(%name, value, "defined variable");
        self.variables.insert(name, value);
        Ok(())
    }

    /// Removes a user variable and returns its value.
    ///
    /// Unknown names and constants are left alone and yield `None`, so
    /// calling this twice is harmless.
    pub fn undefine(&mut self, name: &str) -> Option<f64> {
        let name = normalize(name);
        let removed = self.variables.remove(&name);
        if removed.is_some() {
            debug!(%name, "removed variable");
        }
        removed
    }

    /// Resolves a name case-insensitively, constants first, then user
    /// variables.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<f64> {
        let name = name.to_ascii_lowercase();
        self.constants
            .iter()
            .find(|(constant, _)| *constant == name)
            .map(|(_, value)| *value)
            .or_else(|| self.variables.get(&name).copied())
    }

    /// Reports whether `name` is one of the seeded constants.
    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.iter().any(|(constant, _)| constant == name)
    }

    /// Lists every symbol: constants in seeding order, then user variables
    /// sorted by name.
    ///
    /// # Example
    /// ```
    /// use infix::interpreter::symbols::SymbolTable;
    ///
    /// let mut symbols = SymbolTable::new();
    /// symbols.define("y", 2.0).unwrap();
    /// symbols.define("x", 1.0).unwrap();
    ///
    /// let names: Vec<_> = symbols.list().into_iter().map(|s| s.name).collect();
    /// assert_eq!(names, ["pi", "e", "x", "y"]);
    /// ```
    #[must_use]
    pub fn list(&self) -> Vec<SymbolEntry> {
        let constants = self.constants.iter().map(|(name, value)| {
                                                 SymbolEntry { name:        name.clone(),
                                                               value:       *value,
                                                               is_constant: true, }
                                             });
        let variables = self.variables.iter().map(|(name, value)| {
                                                 SymbolEntry { name:        name.clone(),
                                                               value:       *value,
                                                               is_constant: false, }
                                             });
        constants.chain(variables).collect()
    }
}

/// Parses user-entered value text into a finite number.
///
/// # Errors
/// [`VarError::InvalidValue`] if the text is not a number or is not finite.
///
/// # Example
/// ```
/// use infix::interpreter::symbols::parse_value;
///
/// assert_eq!(parse_value(" 2.5 "), Ok(2.5));
/// assert!(parse_value("abc").is_err());
/// assert!(parse_value("inf").is_err());
/// ```
pub fn parse_value(text: &str) -> Result<f64, VarError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| VarError::InvalidValue { value: text.trim().to_string() })
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
