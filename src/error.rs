//! Error types for shorthand conversion.
//!
//! Only outcomes that the caller must act on are errors. A property with no
//! registered provider is a plain `None`, and a shorthand whose tokens cannot
//! all be classified still converts to the components that could be.

use thiserror::Error;

/// Errors that can occur while parsing or converting declarations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("CSS parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    #[error("provider for '{expected}' cannot convert '{found}'")]
    PropertyMismatch { expected: String, found: String },

    #[error("cannot build '{shorthand}' shorthand: missing '{missing}'")]
    IncompleteLonghandSet { shorthand: String, missing: String },

    #[error("'{shorthand}' shorthand needs {expected} longhand declarations, found {found}")]
    UnexpectedLonghandCount {
        shorthand: String,
        expected: usize,
        found: usize,
    },

    #[error("duplicate longhand declaration '{property}'")]
    DuplicateLonghand { property: String },

    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    pub fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::PropertyMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn incomplete(shorthand: impl Into<String>, missing: impl Into<String>) -> Self {
        Self::IncompleteLonghandSet {
            shorthand: shorthand.into(),
            missing: missing.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
