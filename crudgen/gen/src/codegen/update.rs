//! Update call generation.

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use super::{empty_check, ident, path_expr};
use crate::bindings::Bindings;
use crate::case::to_snake;
use crate::errors::GeneratorError;

/// Statements that settle `version` before a mutating call and add it to
/// the body.
///
/// Version-enabled resources route a zero version through
/// `crudgen::resolve_version`, which may issue one Read; others send the
/// version as given.
pub(crate) fn version_statements(operation: &str, bindings: &Bindings, arg: &Ident) -> TokenStream {
    let resolve = if bindings.version_enabled {
        quote! {
            let version = crudgen::resolve_version(
                #operation,
                version,
                opts.automatic_versioning(),
                || self.read(#arg, opt),
            )
            .await?;
        }
    } else {
        quote! {}
    };
    quote! {
        #resolve
        opts.set_post("version", version);
    }
}

/// Generates `Client::update`, a `PATCH` on the resource path.
///
/// ## Examples
///
/// ```ignore
/// // Generated code for a version-enabled Target:
/// pub async fn update(
///     &self,
///     target_id: &str,
///     version: u32,
///     opt: &[crudgen::CallOption],
/// ) -> crudgen::CallResult<Target> {
///     if target_id.is_empty() { return Err(..); }
///     let mut opts = crudgen::get_opts(opt);
///     let version = crudgen::resolve_version(
///         "Update", version, opts.automatic_versioning(), || self.read(target_id, opt),
///     ).await?;
///     opts.set_post("version", version);
///     ..
/// }
/// ```
pub fn generate_update(bindings: &Bindings) -> Result<TokenStream, GeneratorError> {
    let paths = bindings.require_paths("Update")?;
    let resource = ident(&bindings.name)?;
    let arg = ident(&to_snake(&paths.resource_arg))?;
    let check = empty_check("Update", &arg);
    let path = path_expr(&paths.resource_path)?;
    let version = version_statements("Update", bindings, &arg);
    let doc = format!(" Updates one `{}` with the options given.", bindings.name);

    Ok(quote! {
        impl Client {
            #[doc = #doc]
            pub async fn update(
                &self,
                #arg: &str,
                version: u32,
                opt: &[crudgen::CallOption],
            ) -> crudgen::CallResult<#resource> {
                #check

                let mut opts = crudgen::get_opts(opt);
                #version

                let response = self
                    .client
                    .execute(
                        "Update",
                        crudgen::Method::PATCH,
                        #path,
                        opts.query_map(),
                        Some(opts.post_map()),
                    )
                    .await?;
                response.into_result("Update")
            }
        }
    })
}
