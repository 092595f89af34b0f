/// Builtin function implementations.
///
/// Contains the mathematical functions available in every expression.
pub mod builtin;

/// Builtin table and call dispatch.
pub mod core;

pub use self::core::BUILTIN_FUNCTIONS;
