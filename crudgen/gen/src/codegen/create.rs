//! Create call generation.

use proc_macro2::TokenStream;
use quote::quote;

use super::{empty_check, ident};
use crate::bindings::Bindings;
use crate::case::to_snake;
use crate::errors::GeneratorError;

/// Name of the extra Create argument for resources created with a type.
pub const RESOURCE_TYPE_ARG: &str = "resourceType";

/// Generates `Client::create`, a `POST` on the collection path.
///
/// The collection argument is sent in the body under its snake-case name.
/// With `type_on_create`, a leading `resource_type` argument is required and
/// sent as `type`.
pub fn generate_create(bindings: &Bindings) -> Result<TokenStream, GeneratorError> {
    let paths = bindings.require_paths("Create")?;
    let resource = ident(&bindings.name)?;
    let arg_name = to_snake(&paths.collection_arg);
    let arg = ident(&arg_name)?;
    let check = empty_check("Create", &arg);
    let collection_path = &paths.collection_path;
    let doc = format!(" Creates a `{}` under the given `{arg_name}`.", bindings.name);

    let (type_param, type_body) = if bindings.type_on_create {
        let type_arg = ident(&to_snake(RESOURCE_TYPE_ARG))?;
        let type_check = empty_check("Create", &type_arg);
        (
            quote! { #type_arg: &str, },
            quote! {
                #type_check
                opts.set_post("type", #type_arg);
            },
        )
    } else {
        (quote! {}, quote! {})
    };

    Ok(quote! {
        impl Client {
            #[doc = #doc]
            pub async fn create(
                &self,
                #type_param
                #arg: &str,
                opt: &[crudgen::CallOption],
            ) -> crudgen::CallResult<#resource> {
                #check

                let mut opts = crudgen::get_opts(opt);
                #type_body
                opts.set_post(#arg_name, #arg);

                let response = self
                    .client
                    .execute(
                        "Create",
                        crudgen::Method::POST,
                        #collection_path,
                        opts.query_map(),
                        Some(opts.post_map()),
                    )
                    .await?;
                response.into_result("Create")
            }
        }
    })
}
