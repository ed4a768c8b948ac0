//! Sub-collection mutation generation.
//!
//! A resource with `slice_sub_types` gets three calls per sub-collection,
//! in the order Add, Set, Remove. Each is a `POST` on the resource path with
//! an action suffix (`targets/{id}:add-host-sets`).

use crudgen_define::SliceOp;
use proc_macro2::TokenStream;
use quote::quote;

use super::update::version_statements;
use super::{empty_check, ident, path_expr};
use crate::bindings::Bindings;
use crate::case::{to_kebab, to_snake};
use crate::errors::GeneratorError;

/// Full operation name, e.g. `AddHostSets`.
pub fn operation_name(op: SliceOp, sub_type: &str) -> String {
    format!("{op}{sub_type}")
}

/// Generates one mutation of one sub-collection.
///
/// `field` is the list argument (`hostSetIds`); it becomes the snake-case
/// parameter and body key. Add and Remove take `Vec<String>` and send it
/// only when non-empty. Set takes `Option<Vec<String>>`, where an empty list
/// clears the collection and `None` leaves it alone.
pub fn generate_slice_mutation(
    bindings: &Bindings,
    op: SliceOp,
    sub_type: &str,
    field: &str,
) -> Result<TokenStream, GeneratorError> {
    let full_name = operation_name(op, sub_type);
    let paths = bindings.require_paths(&full_name)?;
    let resource = ident(&bindings.name)?;
    let fn_name = ident(&to_snake(&full_name))?;
    let arg = ident(&to_snake(&paths.resource_arg))?;
    let check = empty_check(&full_name, &arg);
    let path = path_expr(&paths.resource_path_with_action(&to_kebab(&full_name)))?;
    let version = version_statements(&full_name, bindings, &arg);

    let list_key = to_snake(field);
    let list = ident(&list_key)?;
    let (list_type, list_body) = match op {
        SliceOp::Set => (
            quote! { Option<Vec<String>> },
            quote! { opts.replace_list(#list_key, #list); },
        ),
        SliceOp::Add | SliceOp::Remove => (
            quote! { Vec<String> },
            quote! { opts.set_list(#list_key, #list); },
        ),
    };

    let doc = match op {
        SliceOp::Add => format!(" Adds `{list_key}` to the {sub_type} of one `{}`.", bindings.name),
        SliceOp::Set => format!(
            " Replaces the {sub_type} of one `{}`. `Some(vec![])` clears them; `None` sends nothing.",
            bindings.name
        ),
        SliceOp::Remove => format!(
            " Removes `{list_key}` from the {sub_type} of one `{}`.",
            bindings.name
        ),
    };

    Ok(quote! {
        impl Client {
            #[doc = #doc]
            pub async fn #fn_name(
                &self,
                #arg: &str,
                version: u32,
                #list: #list_type,
                opt: &[crudgen::CallOption],
            ) -> crudgen::CallResult<#resource> {
                #check

                let mut opts = crudgen::get_opts(opt);
                #version
                #list_body

                let response = self
                    .client
                    .execute(
                        #full_name,
                        crudgen::Method::POST,
                        #path,
                        opts.query_map(),
                        Some(opts.post_map()),
                    )
                    .await?;
                response.into_result(#full_name)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::format_tokens;
    use crudgen_define::{FieldInfo, FieldType, ResourceDefinition};

    fn target() -> Bindings {
        Bindings::for_resource(
            &ResourceDefinition::new("Target", "targets", "targets/target.rs")
                .with_fields([FieldInfo::new("Version", FieldType::U32, "version")])
                .with_path(["target"])
                .with_slice_sub_type("HostSets", "hostSetIds")
                .versioned(),
        )
    }

    #[test]
    fn add_posts_to_action_path() {
        let code = format_tokens(
            &generate_slice_mutation(&target(), SliceOp::Add, "HostSets", "hostSetIds").unwrap(),
        )
        .unwrap();
        assert!(code.contains("pub async fn add_host_sets("));
        assert!(code.contains("host_set_ids: Vec<String>"));
        assert!(code.contains("\"targets/{}:add-host-sets\""));
        assert!(code.contains("crudgen::path_segment(target_id)"));
        assert!(code.contains("opts.set_list(\"host_set_ids\", host_set_ids)"));
        assert!(code.contains("crudgen::resolve_version("));
    }

    #[test]
    fn set_takes_optional_list() {
        let code = format_tokens(
            &generate_slice_mutation(&target(), SliceOp::Set, "HostSets", "hostSetIds").unwrap(),
        )
        .unwrap();
        assert!(code.contains("pub async fn set_host_sets("));
        assert!(code.contains("host_set_ids: Option<Vec<String>>"));
        assert!(code.contains("opts.replace_list(\"host_set_ids\", host_set_ids)"));
    }

    #[test]
    fn remove_uses_remove_action() {
        let code = format_tokens(
            &generate_slice_mutation(&target(), SliceOp::Remove, "HostSets", "hostSetIds").unwrap(),
        )
        .unwrap();
        assert!(code.contains("\"targets/{}:remove-host-sets\""));
        assert!(code.contains("response.into_result(\"RemoveHostSets\")"));
    }

    #[test]
    fn operation_names_concatenate() {
        assert_eq!(operation_name(SliceOp::Set, "Principals"), "SetPrincipals");
    }
}
