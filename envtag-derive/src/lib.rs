//! Derive macro implementation for envtag

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::{FieldType, StructAttrs};

/// `Record` derive macro
///
/// Implements `envtag::Record` for a struct with named fields, listing
/// every field in declaration order.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Default prefix for all env var names
///
/// **Field-level**:
/// - `#[env("key=NAME required default=VALUE options=A,B")]`: Binding
///   annotation, parsed when the record is processed
///
/// # Example
///
/// See the `envtag` crate documentation for usage examples.
#[proc_macro_derive(Record, attributes(env))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let struct_attrs = StructAttrs::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Record can only be derived for structs with named fields",
            ));
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut assign_arms = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let Some(field_ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let field_type = &field.ty;

        // r#type -> type
        let name = field_ident.to_string().trim_start_matches("r#").to_string();
        let annotation = attrs::annotation(field)?;

        let assign = quote! {
            #index => {
                self.#field_ident = <#field_type as ::envtag::FromValue>::from_value(value)
                    .map_err(|v| ::envtag::EnvError::mismatch(#name, &v))?;
            }
        };
        let (declared_type, assign) = match FieldType::classify(field_type) {
            FieldType::String => (
                quote!(::envtag::DeclaredType::Known(::envtag::Kind::String)),
                assign,
            ),
            FieldType::Bool => (
                quote!(::envtag::DeclaredType::Known(::envtag::Kind::Bool)),
                assign,
            ),
            FieldType::Int(width) => {
                let width = format_ident!("{}", width);
                (
                    quote!(::envtag::DeclaredType::Known(::envtag::Kind::Int(
                        ::envtag::IntWidth::#width
                    ))),
                    assign,
                )
            }
            // No FromValue impl to call; the binder reports the type first
            FieldType::Unsupported(type_name) => (
                quote!(::envtag::DeclaredType::Unsupported(#type_name)),
                quote! {
                    #index => return ::core::result::Result::Err(
                        ::envtag::EnvError::unsupported(#type_name)
                    ),
                },
            ),
        };
        assign_arms.push(assign);

        descriptors.push(quote! {
            ::envtag::FieldDescriptor::new(#name, #declared_type, #annotation)
        });
    }

    let prefix = &struct_attrs.prefix;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envtag::Record for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [::envtag::FieldDescriptor] = &[
                #(#descriptors),*
            ];

            const PREFIX: &'static str = #prefix;

            #[allow(unused_variables, unreachable_code)]
            fn assign(
                &mut self,
                index: usize,
                value: ::envtag::Value,
            ) -> ::core::result::Result<(), ::envtag::EnvError> {
                match index {
                    #(#assign_arms)*
                    _ => {
                        return ::core::result::Result::Err(::envtag::EnvError::invalid_target(
                            ::std::format!("no field at index {}", index),
                        ));
                    }
                }
                ::core::result::Result::Ok(())
            }
        }
    })
}
