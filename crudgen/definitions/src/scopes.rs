//! Scope definitions.
//!
//! Scopes nest: the global scope holds organizations, organizations hold
//! projects. Every scope is created inside its parent, named by `scope_id`.

use crudgen_define::{FieldInfo, FieldType, Operation, ResourceDefinition};

use crate::common;

/// Creates the scope resource.
///
/// ## Examples
///
/// ```
/// use crudgen_definitions::scopes::scope;
///
/// let scope = scope();
/// assert_eq!(scope.path_segments, ["scope"]);
/// assert_eq!(scope.operations.len(), 5);
/// ```
pub fn scope() -> ResourceDefinition {
    ResourceDefinition::new("Scope", "scopes", "scopes/scope.rs")
        .with_fields(common::standard())
        .with_fields([
            common::kind(),
            FieldInfo::new("PrimaryAuthMethodId", FieldType::String, "primary_auth_method_id")
                .with_option(),
        ])
        .with_path(["scope"])
        .with_extra_options([
            FieldInfo::new("SkipAdminRoleCreation", FieldType::Bool, "skip_admin_role_creation")
                .with_option()
                .query(),
            FieldInfo::new(
                "SkipDefaultRoleCreation",
                FieldType::Bool,
                "skip_default_role_creation",
            )
            .with_option()
            .query(),
            common::recursive(),
            common::filter(),
        ])
        .with_operations(Operation::CRUD)
        .versioned()
}

pub fn resources() -> Vec<ResourceDefinition> {
    vec![scope()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_creation_options_are_query_params() {
        let scope = scope();
        let skip: Vec<_> = scope
            .extra_options
            .iter()
            .filter(|o| o.name.starts_with("Skip"))
            .collect();
        assert_eq!(skip.len(), 2);
        assert!(skip.iter().all(|o| o.is_query_param));
    }
}
