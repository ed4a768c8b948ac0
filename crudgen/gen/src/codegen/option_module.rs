//! Package option module generation.
//!
//! One module per package, holding `with_automatic_versioning` plus a
//! `with_*`/`default_*` pair per aggregated option. Where an option lands
//! depends on the field:
//!
//! | Field                  | `with_*`                  | `default_*`              |
//! |------------------------|---------------------------|--------------------------|
//! | subtype set            | `attributes.<wire>` value | `attributes.<wire>` null |
//! | `is_query_param`       | query `<wire>` value      | query `<wire>` removed   |
//! | otherwise              | body `<wire>` value       | body `<wire>` null       |

use crudgen_define::{FieldInfo, FieldType};
use proc_macro2::TokenStream;
use quote::quote;

use super::ident;
use crate::bindings::Bindings;
use crate::case::to_snake;
use crate::errors::GeneratorError;

/// Generates the option module for one package.
pub fn generate_option_module(bindings: &Bindings) -> Result<TokenStream, GeneratorError> {
    let module_doc = [
        format!(" Call options for the `{}` package.", bindings.package),
        String::new(),
        " Options are applied in the order they are passed, so for a given".to_string(),
        " option the last `with_*` or `default_*` wins.".to_string(),
    ];

    let options = bindings
        .fields
        .iter()
        .map(generate_option_pair)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        #(#![doc = #module_doc])*

        pub use crudgen::CallOption;

        /// If set, and the version passed to an update is zero, the current
        /// version is fetched with a read first and used for the update.
        ///
        /// Convenient, but another writer may modify the resource between the
        /// read and the update; use carefully.
        pub fn with_automatic_versioning(enable: bool) -> crudgen::CallOption {
            crudgen::CallOption::automatic_versioning(enable)
        }

        #(#options)*
    })
}

fn generate_option_pair(field: &FieldInfo) -> Result<TokenStream, GeneratorError> {
    let snake = to_snake(&field.option_name());
    let with_fn = ident(&format!("with_{snake}"))?;
    let default_fn = ident(&format!("default_{snake}"))?;
    let param = ident(&to_snake(&field.name))?;
    let wire = &field.wire_name;
    let ty: syn::Type = syn::parse_str(field.field_type.rust_type()).map_err(|e| {
        GeneratorError::CodeGenError(format!("invalid type for option '{}': {e}", field.name))
    })?;

    let value = if field.field_type.is_scalar() && field.field_type != FieldType::String {
        quote! { #param }
    } else {
        quote! { #param.clone() }
    };

    let (set, clear) = if field.is_attribute() {
        (
            quote! { o.set_attribute(#wire, #value) },
            quote! { o.clear_attribute(#wire) },
        )
    } else if field.is_query_param {
        (
            quote! { o.set_query(#wire, #value) },
            quote! { o.clear_query(#wire) },
        )
    } else {
        (
            quote! { o.set_post(#wire, #value) },
            quote! { o.clear_post(#wire) },
        )
    };

    let with_doc = format!(" Sets `{wire}`.");
    let default_doc = if field.is_query_param {
        format!(" Removes `{wire}` from the query.")
    } else {
        format!(" Resets `{wire}` to its server-side default.")
    };

    Ok(quote! {
        #[doc = #with_doc]
        pub fn #with_fn(#param: #ty) -> crudgen::CallOption {
            crudgen::CallOption::new(move |o| #set)
        }

        #[doc = #default_doc]
        pub fn #default_fn() -> crudgen::CallOption {
            crudgen::CallOption::new(|o| #clear)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionSet;
    use crate::render::format_tokens;

    fn module(fields: Vec<FieldInfo>) -> String {
        let set = OptionSet {
            package: "hosts".to_string(),
            fields,
        };
        format_tokens(&generate_option_module(&Bindings::for_options(&set)).unwrap()).unwrap()
    }

    #[test]
    fn always_has_automatic_versioning() {
        let code = module(Vec::new());
        assert!(code.contains("pub fn with_automatic_versioning(enable: bool)"));
        assert!(code.contains("//! Call options for the `hosts` package."));
    }

    #[test]
    fn body_option_sets_and_clears_post() {
        let code = module(vec![FieldInfo::new("Name", FieldType::String, "name").with_option()]);
        assert!(code.contains("pub fn with_name(name: String)"));
        assert!(code.contains("o.set_post(\"name\", name.clone())"));
        assert!(code.contains("pub fn default_name()"));
        assert!(code.contains("o.clear_post(\"name\")"));
    }

    #[test]
    fn attribute_option_is_prefixed_by_subtype() {
        let code = module(vec![
            FieldInfo::new("Address", FieldType::String, "address")
                .with_option()
                .in_subtype("Static"),
        ]);
        assert!(code.contains("pub fn with_static_address(address: String)"));
        assert!(code.contains("o.set_attribute(\"address\", address.clone())"));
        assert!(code.contains("pub fn default_static_address()"));
        assert!(code.contains("o.clear_attribute(\"address\")"));
    }

    #[test]
    fn query_option_writes_query() {
        let code = module(vec![
            FieldInfo::new("Recursive", FieldType::Bool, "recursive")
                .with_option()
                .query(),
        ]);
        assert!(code.contains("pub fn with_recursive(recursive: bool)"));
        assert!(code.contains("o.set_query(\"recursive\", recursive)"));
        assert!(code.contains("o.clear_query(\"recursive\")"));
    }

    #[test]
    fn copy_values_are_not_cloned() {
        let code = module(vec![FieldInfo::new("DefaultPort", FieldType::U32, "default_port").with_option()]);
        assert!(code.contains("o.set_post(\"default_port\", default_port)"));
        assert!(!code.contains("default_port.clone()"));
    }

    #[test]
    fn list_values_are_cloned() {
        let code = module(vec![
            FieldInfo::new("GrantStrings", FieldType::StringList, "grant_strings").with_option(),
        ]);
        assert!(code.contains("pub fn with_grant_strings(grant_strings: Vec<String>)"));
        assert!(code.contains("grant_strings.clone()"));
    }
}
