//! Attribute parsing for `#[env(...)]` annotations.
//!
//! Fields carry the annotation micro-format as a single string literal,
//! `#[env("key=NAME required")]`; it is passed through verbatim and parsed
//! at runtime. Structs may carry `#[env(prefix = "APP_")]`.

use syn::{Attribute, Field, LitStr, Type};

/// Parsed `#[env(...)]` attributes from the struct itself.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Default prefix for every derived key
    pub prefix: String,
}

impl StructAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // prefix = "..."
                if meta.path.is_ident("prefix") {
                    let value: LitStr = meta.value()?.parse()?;
                    parsed.prefix = value.value();
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute"))
            })?;
        }

        Ok(parsed)
    }
}

/// Collect the annotation string of a field.
///
/// Several `#[env("...")]` attributes are joined with a space; a field
/// without one has an empty annotation.
pub fn annotation(field: &Field) -> syn::Result<String> {
    let mut parts = Vec::new();

    for attr in &field.attrs {
        if !attr.path().is_ident("env") {
            continue;
        }
        let lit: LitStr = attr.parse_args().map_err(|e| {
            syn::Error::new(
                e.span(),
                "expected a string literal annotation, e.g. #[env(\"default=8080\")]",
            )
        })?;
        parts.push(lit.value());
    }

    Ok(parts.join(" "))
}

/// Declared type of a field, classified by the last path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    String,
    Bool,
    /// Signed integer; holds the `IntWidth` variant name
    Int(&'static str),
    /// Anything else, as written
    Unsupported(String),
}

impl FieldType {
    pub fn classify(ty: &Type) -> Self {
        let ident = match ty {
            Type::Path(type_path) if type_path.qself.is_none() => type_path
                .path
                .segments
                .last()
                .filter(|seg| seg.arguments.is_empty())
                .map(|seg| seg.ident.to_string()),
            _ => None,
        };

        match ident.as_deref() {
            Some("String") => FieldType::String,
            Some("bool") => FieldType::Bool,
            Some("i8") => FieldType::Int("I8"),
            Some("i16") => FieldType::Int("I16"),
            Some("i32") => FieldType::Int("I32"),
            Some("i64") => FieldType::Int("I64"),
            Some("isize") => FieldType::Int("Isize"),
            _ => FieldType::Unsupported(quote::quote!(#ty).to_string().replace(' ', "")),
        }
    }
}
