//! Package `mod.rs` generation.

use proc_macro2::TokenStream;
use quote::quote;

use super::ident;
use crate::bindings::Bindings;
use crate::errors::GeneratorError;

/// Generates the `mod.rs` declaring every file of one package.
///
/// ## Examples
///
/// ```ignore
/// // Generated code for the targets package:
/// //! Generated clients of the `targets` package.
///
/// pub mod host_set_reference;
/// pub mod option;
/// pub mod target;
/// ```
pub fn generate_package_module(bindings: &Bindings) -> Result<TokenStream, GeneratorError> {
    let doc = format!(" Generated clients of the `{}` package.", bindings.package);
    let modules = bindings
        .modules
        .iter()
        .map(|m| ident(m))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        #![doc = #doc]

        #(pub mod #modules;)*
    })
}
