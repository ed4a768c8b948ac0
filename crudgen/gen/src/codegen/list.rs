//! List call generation.

use proc_macro2::TokenStream;
use quote::quote;

use super::{empty_check, ident};
use crate::bindings::Bindings;
use crate::case::to_snake;
use crate::errors::GeneratorError;

/// Generates `Client::list`, a `GET` on the collection path scoped by the
/// collection argument, which is sent as a query parameter.
///
/// ## Examples
///
/// ```ignore
/// // Generated code for Target (chain ["target"]):
/// pub async fn list(
///     &self,
///     scope_id: &str,
///     opt: &[crudgen::CallOption],
/// ) -> crudgen::CallResult<Vec<Target>> {
///     if scope_id.is_empty() { return Err(..); }
///     let mut opts = crudgen::get_opts(opt);
///     opts.set_query("scope_id", scope_id);
///     let response = self.client.execute("List", crudgen::Method::GET, "targets", ..).await?;
///     response.into_items("List")
/// }
/// ```
pub fn generate_list(bindings: &Bindings) -> Result<TokenStream, GeneratorError> {
    let paths = bindings.require_paths("List")?;
    let resource = ident(&bindings.name)?;
    let arg_name = to_snake(&paths.collection_arg);
    let arg = ident(&arg_name)?;
    let check = empty_check("List", &arg);
    let collection_path = &paths.collection_path;
    let doc = format!(" Lists `{}` resources under the given `{arg_name}`.", bindings.name);

    Ok(quote! {
        impl Client {
            #[doc = #doc]
            pub async fn list(
                &self,
                #arg: &str,
                opt: &[crudgen::CallOption],
            ) -> crudgen::CallResult<Vec<#resource>> {
                #check

                let mut opts = crudgen::get_opts(opt);
                opts.set_query(#arg_name, #arg);

                let response = self
                    .client
                    .execute(
                        "List",
                        crudgen::Method::GET,
                        #collection_path,
                        opts.query_map(),
                        None,
                    )
                    .await?;
                response.into_items("List")
            }
        }
    })
}
