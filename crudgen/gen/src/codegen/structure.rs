//! Resource struct generation.
//!
//! Every resource becomes a plain serde struct. Field names are the
//! snake-case of the declared names; the wire name goes into
//! `#[serde(rename)]`. Version-enabled resources also implement
//! `crudgen::Versioned` so automatic versioning can read their version.
//!
//! Fields that map to the same Rust name collapse into one: the last
//! declaration wins and keeps the position of the first.

use crudgen_define::FieldInfo;
use proc_macro2::TokenStream;
use quote::quote;
use tracing::debug;

use super::ident;
use crate::bindings::Bindings;
use crate::case::to_snake;
use crate::errors::GeneratorError;

/// Name of the field `Versioned` reads.
pub const VERSION_FIELD: &str = "Version";

/// Generates the resource struct.
///
/// ## Examples
///
/// For `Target` with `Id` and `Version` fields:
/// ```ignore
/// // Generated code:
/// #[derive(Debug, Clone, Default, PartialEq, crudgen::serde::Serialize, crudgen::serde::Deserialize)]
/// #[serde(crate = "crudgen::serde")]
/// pub struct Target {
///     #[serde(rename = "id", default)]
///     pub id: String,
///     #[serde(rename = "version", default)]
///     pub version: u32,
/// }
///
/// impl crudgen::Versioned for Target {
///     fn version(&self) -> u32 {
///         self.version
///     }
/// }
/// ```
pub fn generate_struct(bindings: &Bindings) -> Result<TokenStream, GeneratorError> {
    let struct_name = ident(&bindings.name)?;
    let doc = format!(" `{}` resource of the `{}` package.", bindings.name, bindings.package);

    let fields = unique_fields(&bindings.name, &bindings.fields)
        .into_iter()
        .map(|field| {
            let name = ident(&to_snake(&field.name))?;
            let wire = &field.wire_name;
            let ty: syn::Type = syn::parse_str(field.field_type.rust_type()).map_err(|e| {
                GeneratorError::CodeGenError(format!(
                    "invalid type for field '{}': {e}",
                    field.name
                ))
            })?;
            Ok(quote! {
                #[serde(rename = #wire, default)]
                pub #name: #ty
            })
        })
        .collect::<Result<Vec<_>, GeneratorError>>()?;

    let versioned = if bindings.version_enabled {
        let version = ident(&to_snake(VERSION_FIELD))?;
        quote! {
            impl crudgen::Versioned for #struct_name {
                fn version(&self) -> u32 {
                    self.#version
                }
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        #[doc = #doc]
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            crudgen::serde::Serialize,
            crudgen::serde::Deserialize
        )]
        #[serde(crate = "crudgen::serde")]
        pub struct #struct_name {
            #(#fields),*
        }

        #versioned
    })
}

fn unique_fields<'a>(resource: &str, fields: &'a [FieldInfo]) -> Vec<&'a FieldInfo> {
    let mut unique: Vec<&FieldInfo> = Vec::with_capacity(fields.len());
    for field in fields {
        let name = to_snake(&field.name);
        match unique.iter().position(|f| to_snake(&f.name) == name) {
            Some(i) => {
                debug!(resource, field = %name, "field redeclared; last declaration wins");
                unique[i] = field;
            }
            None => unique.push(field),
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::format_tokens;
    use crudgen_define::{FieldInfo, FieldType, ResourceDefinition};

    fn target(versioned: bool) -> Bindings {
        let mut def = ResourceDefinition::new("Target", "targets", "targets/target.rs")
            .with_fields([
                FieldInfo::new("Id", FieldType::String, "id"),
                FieldInfo::new("HostSetIds", FieldType::StringList, "host_set_ids"),
                FieldInfo::new("Attributes", FieldType::Map, "attributes"),
                FieldInfo::new("Version", FieldType::U32, "version"),
            ]);
        if versioned {
            def = def.versioned();
        }
        Bindings::for_resource(&def)
    }

    #[test]
    fn struct_fields_are_snake_case_with_wire_names() {
        let code = format_tokens(&generate_struct(&target(false)).unwrap()).unwrap();
        assert!(code.contains("pub struct Target"));
        assert!(code.contains("pub host_set_ids: Vec<String>"));
        assert!(code.contains("#[serde(rename = \"host_set_ids\", default)]"));
        assert!(code.contains("crudgen::serde_json::Map<String, crudgen::serde_json::Value>"));
        assert!(code.contains("#[serde(crate = \"crudgen::serde\")]"));
    }

    #[test]
    fn versioned_struct_implements_versioned() {
        let code = format_tokens(&generate_struct(&target(true)).unwrap()).unwrap();
        assert!(code.contains("impl crudgen::Versioned for Target"));
        assert!(code.contains("self.version"));
    }

    #[test]
    fn unversioned_struct_has_no_impl() {
        let code = format_tokens(&generate_struct(&target(false)).unwrap()).unwrap();
        assert!(!code.contains("Versioned"));
    }

    #[test]
    fn keyword_field_is_raw() {
        let def = ResourceDefinition::new("Credential", "credentials", "credentials/credential.rs")
            .with_fields([FieldInfo::new("Type", FieldType::String, "type")]);
        let code = format_tokens(&generate_struct(&Bindings::for_resource(&def)).unwrap()).unwrap();
        assert!(code.contains("pub r#type: String"));
    }

    #[test]
    fn redeclared_field_collapses_to_last() {
        let def = ResourceDefinition::new("User", "users", "users/user.rs").with_fields([
            FieldInfo::new("Name", FieldType::String, "name"),
            FieldInfo::new("Id", FieldType::String, "id"),
            FieldInfo::new("Name", FieldType::StringList, "names").with_option(),
        ]);
        let code = format_tokens(&generate_struct(&Bindings::for_resource(&def)).unwrap()).unwrap();
        assert_eq!(code.matches("pub name:").count(), 1, "{code}");
        assert!(code.contains("pub name: Vec<String>"));
        assert!(code.contains("#[serde(rename = \"names\", default)]"));
        assert!(code.find("pub name:").unwrap() < code.find("pub id:").unwrap());
    }

    #[test]
    fn fields_differing_only_in_case_collapse() {
        let def = ResourceDefinition::new("Host", "hosts", "hosts/host.rs").with_fields([
            FieldInfo::new("HostId", FieldType::String, "host_id"),
            FieldInfo::new("hostId", FieldType::String, "hostId"),
        ]);
        let code = format_tokens(&generate_struct(&Bindings::for_resource(&def)).unwrap()).unwrap();
        assert_eq!(code.matches("pub host_id: String").count(), 1, "{code}");
    }

    #[test]
    fn struct_without_fields_is_valid() {
        let def = ResourceDefinition::new("Empty", "misc", "misc/empty.rs");
        let code = format_tokens(&generate_struct(&Bindings::for_resource(&def)).unwrap()).unwrap();
        assert!(code.contains("pub struct Empty {}"));
    }
}
