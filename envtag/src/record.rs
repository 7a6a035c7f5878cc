//! Records and the processor that fills them

use crate::convert::Value;
use crate::error::EnvError;
use crate::field::{bind, FieldDescriptor};
use crate::lookup::{Lookup, OsEnv};
use std::collections::HashSet;

/// A struct whose fields can be bound from the environment.
///
/// Usually implemented with `#[derive(Env)]`. A hand-written impl lists
/// every field in `FIELDS` in declaration order and stores values by index
/// in `assign`.
///
/// Processing the same record from several threads at once is not
/// synchronized; `&mut self` already rules it out for safe code.
pub trait Record {
    /// Field table, in declaration order
    const FIELDS: &'static [FieldDescriptor];

    /// Prefix used by [`process`] when none is given explicitly
    const PREFIX: &'static str = "";

    /// Store `value` into the field at `index` of [`Record::FIELDS`].
    ///
    /// # Errors
    ///
    /// [`EnvError::Mismatch`] if `value` does not fit the field, or
    /// [`EnvError::UnsupportedType`] if the field type has no converter.
    fn assign(&mut self, index: usize, value: Value) -> Result<(), EnvError>;

    /// Build a record from its `Default` and fill it from the process
    /// environment using [`Record::PREFIX`].
    ///
    /// # Errors
    ///
    /// See [`process`].
    fn from_env() -> Result<Self, EnvError>
    where
        Self: Default + Sized,
    {
        let mut record = Self::default();
        process(&mut record)?;
        Ok(record)
    }
}

/// Processes records against a lookup source with a fixed prefix.
///
/// # Example
///
/// ```rust
/// use envtag::{Env, Record};
/// use std::collections::HashMap;
///
/// #[derive(Debug, Default, Record)]
/// struct Config {
///     #[env("default=svc")]
///     name: String,
///     #[env("required")]
///     port: i32,
/// }
///
/// # fn main() -> anyhow::Result<()> {
/// let vars = HashMap::from([("APP_PORT".to_string(), "8080".to_string())]);
/// let env = Env::with_lookup(vars).prefix("APP_");
///
/// let mut config = Config::default();
/// env.process(&mut config)?;
/// assert_eq!(config.name, "svc");
/// assert_eq!(config.port, 8080);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Env<L = OsEnv> {
    prefix: Option<String>,
    lookup: L,
}

impl Env<OsEnv> {
    /// Processor reading the process environment with the record's own prefix
    pub fn new() -> Self {
        Self::default()
    }

    /// Processor reading the process environment with `prefix`
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new().prefix(prefix)
    }
}

impl<L: Lookup> Env<L> {
    /// Processor reading from a custom lookup source
    pub fn with_lookup(lookup: L) -> Self {
        Self {
            prefix: None,
            lookup,
        }
    }

    /// Builder-style [`Env::set_prefix`]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.set_prefix(prefix);
        self
    }

    /// Set the prefix, overriding any `Record::PREFIX`
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = Some(prefix.into());
    }

    /// The explicit prefix, if one was set
    pub fn get_prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Fill every field of `record` in declaration order.
    ///
    /// Stops at the first failing field. Fields before it keep their newly
    /// bound values; nothing is rolled back.
    ///
    /// # Errors
    ///
    /// - [`EnvError::InvalidTarget`] if the field table is malformed; no
    ///   field is touched in that case
    /// - any error from binding or assigning a field
    pub fn process<R: Record>(&self, record: &mut R) -> Result<(), EnvError> {
        validate_fields(R::FIELDS)?;

        let prefix = self.prefix.as_deref().unwrap_or(R::PREFIX);
        for (index, field) in R::FIELDS.iter().enumerate() {
            let value = bind(prefix, field, &self.lookup)?;
            record.assign(index, value)?;
        }

        tracing::debug!(
            record = std::any::type_name::<R>(),
            fields = R::FIELDS.len(),
            "processed record"
        );
        Ok(())
    }

    /// Like [`Env::process`], but panics on error.
    ///
    /// # Panics
    ///
    /// If processing fails, with the error message.
    pub fn must_process<R: Record>(&self, record: &mut R) {
        if let Err(e) = self.process(record) {
            panic!("{e}");
        }
    }
}

fn validate_fields(fields: &[FieldDescriptor]) -> Result<(), EnvError> {
    let mut seen = HashSet::with_capacity(fields.len());
    for field in fields {
        if field.name.is_empty() {
            return Err(EnvError::invalid_target("field with an empty name"));
        }
        if !seen.insert(field.name) {
            return Err(EnvError::invalid_target(format!(
                "field '{}' is listed more than once",
                field.name
            )));
        }
    }
    Ok(())
}

/// Fill `record` from the process environment using `R::PREFIX`.
///
/// # Errors
///
/// See [`Env::process`].
pub fn process<R: Record>(record: &mut R) -> Result<(), EnvError> {
    Env::new().process(record)
}

/// Fill `record` from the process environment using `prefix`.
///
/// # Errors
///
/// See [`Env::process`].
pub fn process_with_prefix<R: Record>(record: &mut R, prefix: &str) -> Result<(), EnvError> {
    Env::with_prefix(prefix).process(record)
}

/// Like [`process`], but panics on error.
///
/// # Panics
///
/// If processing fails, with the error message.
pub fn must_process<R: Record>(record: &mut R) {
    Env::new().must_process(record);
}

/// Like [`process_with_prefix`], but panics on error.
///
/// # Panics
///
/// If processing fails, with the error message.
pub fn must_process_with_prefix<R: Record>(record: &mut R, prefix: &str) {
    Env::with_prefix(prefix).must_process(record);
}
