//! Delete call generation.

use proc_macro2::TokenStream;
use quote::quote;

use super::{empty_check, ident, path_expr};
use crate::bindings::Bindings;
use crate::case::to_snake;
use crate::errors::GeneratorError;

/// Generates `Client::delete`, a `DELETE` on the resource path returning
/// whether the resource existed.
pub fn generate_delete(bindings: &Bindings) -> Result<TokenStream, GeneratorError> {
    let paths = bindings.require_paths("Delete")?;
    let arg = ident(&to_snake(&paths.resource_arg))?;
    let check = empty_check("Delete", &arg);
    let path = path_expr(&paths.resource_path)?;
    let doc = format!(
        " Deletes one `{}`, returning whether it existed.",
        bindings.name
    );

    Ok(quote! {
        impl Client {
            #[doc = #doc]
            pub async fn delete(
                &self,
                #arg: &str,
                opt: &[crudgen::CallOption],
            ) -> crudgen::CallResult<bool> {
                #check

                let opts = crudgen::get_opts(opt);

                let response = self
                    .client
                    .execute(
                        "Delete",
                        crudgen::Method::DELETE,
                        #path,
                        opts.query_map(),
                        None,
                    )
                    .await?;
                response.into_existed("Delete")
            }
        }
    })
}
