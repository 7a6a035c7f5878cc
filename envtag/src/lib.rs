//! Bind environment variables to struct fields using tag-style annotations
//!
//! `envtag` fills the fields of a configuration struct from environment
//! variables. Each field carries a small annotation string controlling the
//! variable name, default value, requirement and allowed values.
//!
//! # Features
//!
//! - **Declarative**: Field table generated with `#[derive(Record)]`
//! - **Prefixes**: Per call, per [`Env`], or per struct with `#[env(prefix = "...")]`
//! - **Defaults and allow-lists**: Parsed eagerly against the field type
//! - **Pluggable source**: Read from the process environment or any [`Lookup`]
//!
//! # Supported Field Types
//!
//! - `String`: the value as-is
//! - `i8`, `i16`, `i32`, `i64`, `isize`: base-10 signed integers
//! - `bool`: `1 t T TRUE true True` and `0 f F FALSE false False`
//!
//! Fields of any other type fail with [`EnvError::UnsupportedType`] when
//! the record is processed.
//!
//! # Example
//!
//! ```rust
//! use envtag::Record;
//!
//! #[derive(Debug, Default, Record)]
//! struct Config {
//!     #[env("default=svc")]
//!     name: String,
//!
//!     #[env("required")]
//!     port: i32,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::remove_var("NAME");
//! #     std::env::set_var("PORT", "8080");
//! let mut config = Config::default();
//! envtag::process(&mut config)?;
//! assert_eq!(config.name, "svc");
//! assert_eq!(config.port, 8080);
//! #     Ok(())
//! # }
//! ```
//!
//! # Annotation Syntax
//!
//! Space-separated tokens inside `#[env("...")]`:
//!
//! | Token             | Meaning                                             |
//! |-------------------|-----------------------------------------------------|
//! | `key=NAME`        | Look up `NAME` instead of the field name            |
//! | `required`        | Fail if the variable is absent or empty             |
//! | `default=VALUE`   | Use `VALUE` if the variable is absent or empty      |
//! | `options=A,B,C`   | Fail unless the resolved value is one of these      |
//!
//! The variable name is `uppercase(prefix + key)`. `required` wins over
//! `default`. Unknown tokens are ignored. Values cannot contain spaces, and
//! option values cannot contain commas.
//!
//! ```rust
//! # use envtag::Record;
//! #[derive(Default, Record)]
//! #[env(prefix = "APP_")]
//! struct Config {
//!     // Reads APP_LOG_LEVEL
//!     #[env("key=log_level default=info options=debug,info,warn")]
//!     level: String,
//! }
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::remove_var("APP_LOG_LEVEL");
//! #     let config = Config::from_env()?;
//! #     assert_eq!(config.level, "info");
//! #     Ok(())
//! # }
//! ```
//!
//! # Partial Updates
//!
//! Fields are processed in declaration order and processing stops at the
//! first error. Fields processed before the failing one keep their new
//! values.

pub mod annotation;
mod convert;
mod error;
mod field;
mod lookup;
mod record;

pub use convert::{convert, parse_bool, DeclaredType, FromValue, IntWidth, Kind, Value};
pub use envtag_derive::Record;
pub use error::{ConversionError, EnvError};
pub use field::{bind, FieldDescriptor, Policy};
pub use lookup::{from_fn, FromFn, Lookup, OsEnv};
pub use record::{
    must_process, must_process_with_prefix, process, process_with_prefix, Env, Record,
};
