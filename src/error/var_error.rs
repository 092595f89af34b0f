use thiserror::Error;

/// Represents all errors that can occur while defining a user variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VarError {
    /// The name is empty, looks like a number, or is not a single identifier.
    #[error("{}", invalid_name_message(.name))]
    InvalidName {
        /// The rejected name, after trimming and lower-casing.
        name: String,
    },
    /// The name belongs to a constant, a builtin function, or a variable that
    /// already exists.
    #[error("Cannot use reserved name: '{name}'")]
    ReservedName {
        /// The rejected name.
        name: String,
    },
    /// The value is missing, unparsable, or not finite.
    #[error("Valid value is required for variable")]
    InvalidValue {
        /// The text (or printed number) that was rejected.
        value: String,
    },
}

fn invalid_name_message(name: &str) -> String {
    if name.is_empty() {
        "Name is required.".to_string()
    } else if name.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        "Numbers can not be used as variable names".to_string()
    } else {
        format!("Invalid variable name: '{name}'")
    }
}
