//! Conversion from raw environment strings into typed values
//!
//! The set of supported declared types is closed: [`Kind`] lists every type
//! a field may have, and adding one means adding a variant and handling it
//! in every `match` below.

use crate::error::{ConversionError, EnvError};
use std::fmt;

/// Width of a signed integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
    Isize,
}

impl IntWidth {
    /// Rust name of the integer type
    pub const fn name(self) -> &'static str {
        match self {
            IntWidth::I8 => "i8",
            IntWidth::I16 => "i16",
            IntWidth::I32 => "i32",
            IntWidth::I64 => "i64",
            IntWidth::Isize => "isize",
        }
    }

    fn bounds(self) -> (i64, i64) {
        match self {
            IntWidth::I8 => (i8::MIN.into(), i8::MAX.into()),
            IntWidth::I16 => (i16::MIN.into(), i16::MAX.into()),
            IntWidth::I32 => (i32::MIN.into(), i32::MAX.into()),
            IntWidth::I64 => (i64::MIN, i64::MAX),
            // isize is at most 64 bits on every supported target
            IntWidth::Isize => (isize::MIN as i64, isize::MAX as i64),
        }
    }
}

/// A declared field type that has a converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Int(IntWidth),
    Bool,
}

impl Kind {
    /// Rust name of the declared type, used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Kind::String => "String",
            Kind::Int(width) => width.name(),
            Kind::Bool => "bool",
        }
    }

    /// Parse a non-empty raw string as this kind.
    pub fn parse(self, raw: &str) -> Result<Value, ConversionError> {
        match self {
            Kind::String => Ok(Value::Str(raw.to_string())),
            Kind::Int(width) => {
                let (min, max) = width.bounds();
                raw.parse::<i64>()
                    .ok()
                    .filter(|n| (min..=max).contains(n))
                    .map(Value::Int)
                    .ok_or_else(|| ConversionError::new(raw, width.name()))
            }
            Kind::Bool => parse_bool(raw)
                .map(Value::Bool)
                .ok_or_else(|| ConversionError::new(raw, "bool")),
        }
    }

    /// The value a field of this kind holds when nothing else applies
    pub fn zero(self) -> Value {
        match self {
            Kind::String => Value::Str(String::new()),
            Kind::Int(_) => Value::Int(0),
            Kind::Bool => Value::Bool(false),
        }
    }
}

/// The declared type of a field as recorded in its descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType {
    /// A type with a converter
    Known(Kind),
    /// Any other type, carrying its name as written on the field
    Unsupported(&'static str),
}

impl DeclaredType {
    pub const fn name(self) -> &'static str {
        match self {
            DeclaredType::Known(kind) => kind.name(),
            DeclaredType::Unsupported(name) => name,
        }
    }

    /// Resolve to a [`Kind`], or fail with `UnsupportedType`
    pub fn kind(self) -> Result<Kind, EnvError> {
        match self {
            DeclaredType::Known(kind) => Ok(kind),
            DeclaredType::Unsupported(name) => Err(EnvError::unsupported(name)),
        }
    }
}

/// A converted field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl Value {
    /// Type name of the value itself (integers report `i64`)
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "String",
            Value::Int(_) => "i64",
            Value::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Convert a raw string into a value of the declared type.
///
/// Returns `Ok(None)` for an empty string: the caller decides what an
/// absent value means. Unsupported types fail regardless of the input.
///
/// # Errors
///
/// - [`EnvError::UnsupportedType`] if `ty` has no converter
/// - [`EnvError::Conversion`] if `raw` is not a valid literal of `ty`
pub fn convert(ty: DeclaredType, raw: &str) -> Result<Option<Value>, EnvError> {
    let kind = ty.kind()?;
    if raw.is_empty() {
        return Ok(None);
    }
    Ok(Some(kind.parse(raw)?))
}

/// Parse a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`,
/// `FALSE`, `false`, `False`. Any other spelling is rejected.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Types a [`Value`] can be stored into.
///
/// Implemented for every field type [`Kind`] covers; used by
/// macro-generated `Record::assign` bodies.
pub trait FromValue: Sized {
    /// Extract `Self`, handing the value back if it has another kind
    fn from_value(value: Value) -> Result<Self, Value>;
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(other),
        }
    }
}

macro_rules! impl_from_value_int {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::Int(n) => <$ty>::try_from(n).map_err(|_| Value::Int(n)),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

impl_from_value_int!(i8, i16, i32, i64, isize);
