//! Error types for binding environment variables to record fields

use crate::convert::Value;
use std::fmt;

/// A non-empty string could not be parsed as the declared type.
///
/// Produced for live environment values, `default=` literals and every
/// `options=` element alike, so the message shape is identical in all three
/// places.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not convert value \"{value}\" into {type_name} type")]
pub struct ConversionError {
    /// The raw string that failed to parse
    pub value: String,
    /// Name of the declared type (e.g. `i32`, `bool`)
    pub type_name: String,
}

impl ConversionError {
    pub(crate) fn new(value: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            type_name: type_name.into(),
        }
    }
}

/// Errors that can occur while processing a record.
///
/// Every variant aborts the whole `process` call; nothing is retried and
/// errors from several fields are never aggregated.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// The record's field table cannot be processed.
    ///
    /// Raised before any field is written.
    #[error("expected a record with named fields: {reason}")]
    InvalidTarget {
        /// What is wrong with the field table
        reason: String,
    },

    /// A field's declared type has no converter.
    #[error("unsupported field type {type_name}")]
    UnsupportedType {
        /// The declared type as written on the field
        type_name: String,
    },

    /// A `default=` or `options=` literal failed to convert.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// The environment value for `key` failed to convert.
    #[error("{key}: {source}")]
    InvalidValue {
        /// Derived environment variable name
        key: String,
        /// The underlying conversion failure
        source: ConversionError,
    },

    /// A `required` field's environment variable is absent or empty.
    #[error("{key} required")]
    RequiredMissing {
        /// Derived environment variable name
        key: String,
    },

    /// The resolved value is not part of the field's `options=` list.
    #[error("{key}=\"{value}\" not in allowed options: {}", DisplayOptions(.options))]
    OptionNotAllowed {
        /// Derived environment variable name
        key: String,
        /// The rejected value
        value: Value,
        /// The allowed values, in annotation order
        options: Vec<Value>,
    },

    /// A hand-written `Record::assign` received a value of another kind.
    #[error("field '{field}' cannot hold a {type_name} value")]
    Mismatch {
        /// Name of the field being assigned
        field: String,
        /// Type name of the value that was offered
        type_name: String,
    },
}

impl EnvError {
    /// Create an invalid target error
    pub fn invalid_target(reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            reason: reason.into(),
        }
    }

    /// Create an unsupported type error (used by macro-generated code)
    #[doc(hidden)]
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Create a mismatch error for a value offered to the wrong field
    pub fn mismatch(field: impl Into<String>, value: &Value) -> Self {
        Self::Mismatch {
            field: field.into(),
            type_name: value.type_name().to_string(),
        }
    }
}

/// Formats an option list the way `[a b c]` reads in error messages.
struct DisplayOptions<'a>(&'a [Value]);

impl fmt::Display for DisplayOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
