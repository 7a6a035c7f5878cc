//! Field descriptors and the per-field binder

use crate::annotation::{self, Token};
use crate::convert::{convert, DeclaredType, Value};
use crate::error::EnvError;
use crate::lookup::Lookup;

/// Static metadata for one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as declared
    pub name: &'static str,
    /// Declared type of the field
    pub ty: DeclaredType,
    /// Raw annotation string, empty if the field has none
    pub annotation: &'static str,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, ty: DeclaredType, annotation: &'static str) -> Self {
        Self {
            name,
            ty,
            annotation,
        }
    }
}

/// Binding policy parsed from a field's annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    /// Derived environment variable name: `uppercase(prefix + key)`
    pub key: String,
    pub required: bool,
    /// Converted `default=` value, `None` if absent or empty
    pub default: Option<Value>,
    /// Converted `options=` values; empty means unrestricted
    pub options: Vec<Value>,
}

impl Policy {
    /// Build the policy for `field`.
    ///
    /// `default=` and `options=` literals are converted eagerly against the
    /// field's declared type. Empty option elements are dropped.
    ///
    /// # Errors
    ///
    /// - [`EnvError::UnsupportedType`] if the field type has no converter
    /// - [`EnvError::Conversion`] if a default or option literal is malformed
    pub fn from_annotation(field: &FieldDescriptor, prefix: &str) -> Result<Self, EnvError> {
        let mut key = field.name;
        let mut required = false;
        let mut default = None;
        let mut options = Vec::new();

        for token in annotation::parse(field.annotation) {
            match token {
                Token::Key(name) => key = name,
                Token::Required => required = true,
                Token::Default(raw) => default = convert(field.ty, raw)?,
                Token::Options(raws) => {
                    options = raws
                        .into_iter()
                        .map(|raw| convert(field.ty, raw))
                        .filter_map(Result::transpose)
                        .collect::<Result<_, _>>()?;
                }
                Token::Unknown(raw) => {
                    tracing::warn!(field = field.name, token = raw, "ignoring unknown annotation token");
                }
            }
        }

        Ok(Self {
            key: format!("{prefix}{key}").to_uppercase(),
            required,
            default,
            options,
        })
    }

    fn check_options(&self, value: Value) -> Result<Value, EnvError> {
        if self.options.is_empty() || self.options.contains(&value) {
            return Ok(value);
        }
        Err(EnvError::OptionNotAllowed {
            key: self.key.clone(),
            value,
            options: self.options.clone(),
        })
    }
}

/// Resolve the value of one field.
///
/// Precedence: a non-empty environment value wins; otherwise `required`
/// fails even if a default exists; otherwise the default, then the type's
/// zero value. The `options=` list is checked against whichever value
/// was chosen.
///
/// # Errors
///
/// Any [`EnvError`] except `InvalidTarget` and `Mismatch`.
pub fn bind<L>(prefix: &str, field: &FieldDescriptor, lookup: &L) -> Result<Value, EnvError>
where
    L: Lookup + ?Sized,
{
    let policy = Policy::from_annotation(field, prefix)?;
    tracing::trace!(field = field.name, key = %policy.key, "binding field");

    let raw = lookup.get(&policy.key).unwrap_or_default();
    let value = match convert(field.ty, &raw) {
        Ok(Some(value)) => value,
        Ok(None) => resolve_absent(field, &policy)?,
        Err(EnvError::Conversion(source)) => {
            return Err(EnvError::InvalidValue {
                key: policy.key,
                source,
            })
        }
        Err(e) => return Err(e),
    };

    policy.check_options(value)
}

fn resolve_absent(field: &FieldDescriptor, policy: &Policy) -> Result<Value, EnvError> {
    if policy.required {
        return Err(EnvError::RequiredMissing {
            key: policy.key.clone(),
        });
    }
    if let Some(default) = &policy.default {
        tracing::debug!(key = %policy.key, "environment variable not set, using default");
        return Ok(default.clone());
    }
    tracing::debug!(key = %policy.key, "environment variable not set, using zero value");
    Ok(field.ty.kind()?.zero())
}
