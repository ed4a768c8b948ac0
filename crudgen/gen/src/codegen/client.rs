//! Resource client generation.

use proc_macro2::TokenStream;
use quote::quote;

use crate::bindings::Bindings;
use crate::errors::GeneratorError;

/// Generates the `Client` struct wrapping a `crudgen::ApiClient`.
///
/// ## Examples
///
/// ```ignore
/// // Generated code:
/// pub struct Client {
///     client: crudgen::ApiClient,
/// }
///
/// impl Client {
///     pub fn new(client: &crudgen::ApiClient) -> Self {
///         Self { client: client.clone() }
///     }
///
///     pub fn api_client(&self) -> &crudgen::ApiClient {
///         &self.client
///     }
/// }
/// ```
pub fn generate_client(bindings: &Bindings) -> Result<TokenStream, GeneratorError> {
    let doc = format!(" Client for the `{}` collection.", bindings.name);

    Ok(quote! {
        #[doc = #doc]
        #[derive(Debug, Clone)]
        pub struct Client {
            client: crudgen::ApiClient,
        }

        impl Client {
            /// Creates a client for this collection.
            ///
            /// The API client is cloned; later changes to it do not affect
            /// this client. Use [`Client::api_client`] to reach the copy.
            pub fn new(client: &crudgen::ApiClient) -> Self {
                Self {
                    client: client.clone(),
                }
            }

            /// Returns the underlying API client.
            pub fn api_client(&self) -> &crudgen::ApiClient {
                &self.client
            }
        }
    })
}
