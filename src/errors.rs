/*!
This module contains the error types of the crate.

Errors are only produced when assembling comparers at runtime (see [`crate::builder`]) and when
parsing enum values from text (see [`crate::enums`]). Evaluating a comparer never produces an error:
a panic raised by a user supplied function is not caught and unwinds straight through to the caller
of `compare`, `equals` or `hash_of`.
*/

use std::fmt;

/// Result alias for operations that construct comparers.
pub type ComparerResult<T> = Result<T, ComparerError>;

/// Errors raised while constructing comparers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ComparerError {
    /**
    Variant for a required function, key selector or comparer that was not provided.

    The string describes which argument was missing.
    */
    InvalidArgument(String),
}

impl std::error::Error for ComparerError {}

impl fmt::Display for ComparerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparerError::InvalidArgument(reason) => write!(f, "Invalid argument: {}", reason),
        }
    }
}

/// Errors raised when converting text into an enum value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseEnumError {
    /// Variant for input that was empty or only contained whitespace.
    Empty {
        /// The name of the enum that was being parsed.
        type_name: &'static str,
    },

    /// Variant for input that did not name a variant or match a variant's discriminant.
    UnknownValue {
        /// The name of the enum that was being parsed.
        type_name: &'static str,

        /// The (trimmed) text that was provided.
        value: String,
    },
}

impl std::error::Error for ParseEnumError {}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseEnumError::Empty { type_name } => {
                write!(f, "Cannot parse an empty string as a value of {}", type_name)
            }
            ParseEnumError::UnknownValue { type_name, value } => {
                write!(f, "The value \"{}\" is not defined by {}", value, type_name)
            }
        }
    }
}
