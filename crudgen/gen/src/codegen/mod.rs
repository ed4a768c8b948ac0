//! Code generation for resource files and option modules.
//!
//! Each submodule turns [`Bindings`](crate::bindings::Bindings) into a
//! `proc_macro2::TokenStream` for one template:
//!
//! - [`structure`] - the resource struct (and its `Versioned` impl)
//! - [`client`] - the `Client` wrapper around `crudgen::ApiClient`
//! - [`list`], [`read`], [`create`], [`update`], [`delete`] - CRUD calls
//! - [`slice`] - Add/Set/Remove mutations of one sub-collection
//! - [`option_module`] - the per-package `with_*`/`default_*` functions
//! - [`package_module`] - the per-package `mod.rs`
//!
//! Generated code spells every external path through the `crudgen` runtime
//! crate, so it needs no `use` items.
//!
//! See [`crate::render`] for validation and formatting.

pub mod client;
pub mod create;
pub mod delete;
pub mod list;
pub mod option_module;
pub mod package_module;
pub mod read;
pub mod slice;
pub mod structure;
pub mod update;

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use crate::errors::GeneratorError;

pub use client::generate_client;
pub use create::generate_create;
pub use delete::generate_delete;
pub use list::generate_list;
pub use option_module::generate_option_module;
pub use package_module::generate_package_module;
pub use read::generate_read;
pub use slice::generate_slice_mutation;
pub use structure::generate_struct;
pub use update::generate_update;

/// Builds an identifier, falling back to a raw identifier for keywords.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if `name` is not a valid Rust
/// identifier even in raw form (`self`, `1st`, `a-b`, ...).
pub fn ident(name: &str) -> Result<Ident, GeneratorError> {
    if let Ok(id) = syn::parse_str::<Ident>(name) {
        return Ok(id);
    }
    syn::parse_str::<Ident>(&format!("r#{name}"))
        .map(|_| Ident::new_raw(name, Span::call_site()))
        .map_err(|_| GeneratorError::CodeGenError(format!("'{name}' is not a valid identifier")))
}

/// The precondition every resource- or collection-scoped call starts with.
pub(crate) fn empty_check(operation: &str, arg: &Ident) -> TokenStream {
    let arg_name = arg.to_string();
    let arg_name = arg_name.trim_start_matches("r#");
    quote! {
        if #arg.is_empty() {
            return Err(crudgen::ClientError::empty_argument(#operation, #arg_name));
        }
    }
}

/// `format!` expression for a path template, one `&str` argument per site.
///
/// Each argument is percent-encoded by the runtime before substitution.
pub(crate) fn path_expr(path: &crate::paths::PathTemplate) -> Result<TokenStream, GeneratorError> {
    let fmt = path.format_string();
    if path.is_literal() {
        return Ok(quote! { #fmt });
    }
    let args = path
        .args()
        .into_iter()
        .map(|a| ident(&crate::case::to_snake(a)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(quote! { &format!(#fmt, #(crudgen::path_segment(#args)),*) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::to_path;

    #[test]
    fn ident_accepts_plain_names() {
        assert_eq!(ident("scope_id").unwrap().to_string(), "scope_id");
    }

    #[test]
    fn ident_escapes_keywords() {
        assert_eq!(ident("type").unwrap().to_string(), "r#type");
    }

    #[test]
    fn ident_rejects_invalid_names() {
        assert!(ident("self").is_err());
        assert!(ident("host-set").is_err());
        assert!(ident("").is_err());
    }

    #[test]
    fn empty_check_reports_unescaped_name() {
        let tokens = empty_check("Create", &ident("type").unwrap());
        let code = tokens.to_string();
        assert!(code.contains("r#type"), "{code}");
        assert!(code.contains("\"type\""), "{code}");
    }

    #[test]
    fn literal_path_is_a_str() {
        let tokens = path_expr(&to_path(&["scopes"], None)).unwrap();
        assert_eq!(tokens.to_string(), "\"scopes\"");
    }

    #[test]
    fn templated_path_formats_snake_args() {
        let tokens = path_expr(&to_path(&["organization", "orgId", "project"], None)).unwrap();
        let code = tokens.to_string();
        assert!(code.contains("format"), "{code}");
        assert!(code.contains("org_id"), "{code}");
    }

    #[test]
    fn templated_path_escapes_each_arg() {
        let tokens = path_expr(&to_path(&["a", "aId", "b", "bId", "c"], None)).unwrap();
        let code = tokens.to_string();
        assert_eq!(code.matches("crudgen :: path_segment").count(), 2, "{code}");
    }
}
