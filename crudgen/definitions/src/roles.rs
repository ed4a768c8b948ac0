//! Role definitions.
//!
//! A role ties principals (users and groups) to grant strings. Both lists
//! are sub-collections of the role.

use crudgen_define::{FieldInfo, FieldType, Operation, ResourceDefinition};

use crate::common;

/// Creates the role resource.
///
/// ## Examples
///
/// ```
/// use crudgen_definitions::roles::role;
///
/// let role = role();
/// let sub_types: Vec<_> = role.slice_sub_types.keys().collect();
/// assert_eq!(sub_types, ["Grants", "Principals"]);
/// ```
pub fn role() -> ResourceDefinition {
    ResourceDefinition::new("Role", "roles", "roles/role.rs")
        .with_fields(common::standard())
        .with_fields([
            FieldInfo::new("GrantScopeId", FieldType::String, "grant_scope_id").with_option(),
            FieldInfo::new("PrincipalIds", FieldType::StringList, "principal_ids"),
            FieldInfo::new("GrantStrings", FieldType::StringList, "grant_strings"),
        ])
        .with_path(["role"])
        .with_extra_options([common::recursive(), common::filter()])
        .with_operations(Operation::CRUD)
        .with_slice_sub_type("Principals", "principalIds")
        .with_slice_sub_type("Grants", "grantStrings")
        .versioned()
}

/// A principal attached to a role.
pub fn principal() -> ResourceDefinition {
    ResourceDefinition::new("Principal", "roles", "roles/principal.rs")
        .with_fields([common::id(), common::kind(), common::scope_id()])
        .output_only()
}

/// A parsed grant attached to a role.
pub fn grant() -> ResourceDefinition {
    ResourceDefinition::new("Grant", "roles", "roles/grant.rs")
        .with_fields([
            FieldInfo::new("Raw", FieldType::String, "raw"),
            FieldInfo::new("Canonical", FieldType::String, "canonical"),
            FieldInfo::new("Json", FieldType::Map, "json"),
        ])
        .output_only()
}

pub fn resources() -> Vec<ResourceDefinition> {
    vec![role(), principal(), grant()]
}
