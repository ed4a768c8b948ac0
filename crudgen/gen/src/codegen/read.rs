//! Read call generation.

use proc_macro2::TokenStream;
use quote::quote;

use super::{empty_check, ident, path_expr};
use crate::bindings::Bindings;
use crate::case::to_snake;
use crate::errors::GeneratorError;

/// Generates `Client::read`, a `GET` on the resource path.
pub fn generate_read(bindings: &Bindings) -> Result<TokenStream, GeneratorError> {
    let paths = bindings.require_paths("Read")?;
    let resource = ident(&bindings.name)?;
    let arg = ident(&to_snake(&paths.resource_arg))?;
    let check = empty_check("Read", &arg);
    let path = path_expr(&paths.resource_path)?;
    let doc = format!(" Reads one `{}`.", bindings.name);

    Ok(quote! {
        impl Client {
            #[doc = #doc]
            pub async fn read(
                &self,
                #arg: &str,
                opt: &[crudgen::CallOption],
            ) -> crudgen::CallResult<#resource> {
                #check

                let opts = crudgen::get_opts(opt);

                let response = self
                    .client
                    .execute(
                        "Read",
                        crudgen::Method::GET,
                        #path,
                        opts.query_map(),
                        None,
                    )
                    .await?;
                response.into_result("Read")
            }
        }
    })
}
