//! Case conversion for generated names.
//!
//! Thin wrappers over `convert_case` so the rest of the generator never
//! spells out a [`Case`] directly. All functions are total and pure.

use convert_case::{Case, Casing};

/// `hostSetIds` -> `host_set_ids`, `AddHostSets` -> `add_host_sets`.
///
/// ## Examples
///
/// ```
/// use crudgen_gen::case::to_snake;
///
/// assert_eq!(to_snake("scopeId"), "scope_id");
/// assert_eq!(to_snake("AddHostSets"), "add_host_sets");
/// ```
pub fn to_snake(s: &str) -> String {
    s.to_case(Case::Snake)
}

/// `AddHostSets` -> `add-host-sets`.
///
/// ## Examples
///
/// ```
/// use crudgen_gen::case::to_kebab;
///
/// assert_eq!(to_kebab("SetPrincipals"), "set-principals");
/// ```
pub fn to_kebab(s: &str) -> String {
    s.to_case(Case::Kebab)
}

/// `host_catalog` -> `hostCatalog`, `Scope` -> `scope`.
///
/// Hyphens are treated as word separators, matching the way chain segments
/// like `host-catalog` are turned into identifiers.
///
/// ## Examples
///
/// ```
/// use crudgen_gen::case::to_lower_camel;
///
/// assert_eq!(to_lower_camel("host-catalog"), "hostCatalog");
/// assert_eq!(to_lower_camel("orgId"), "orgId");
/// ```
pub fn to_lower_camel(s: &str) -> String {
    s.replace('-', "_").to_case(Case::Camel)
}

/// `target` -> `targets`, `auth-method` -> `auth-methods`.
///
/// Chain segments name one resource; the collection endpoint is that name
/// with an `s` appended, with no further English rules.
///
/// ## Examples
///
/// ```
/// use crudgen_gen::case::pluralize;
///
/// assert_eq!(pluralize("host-set"), "host-sets");
/// ```
pub fn pluralize(s: &str) -> String {
    format!("{s}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_of_camel_identifiers() {
        assert_eq!(to_snake("orgId"), "org_id");
        assert_eq!(to_snake("hostSetIds"), "host_set_ids");
        assert_eq!(to_snake("resourceType"), "resource_type");
        assert_eq!(to_snake("name"), "name");
    }

    #[test]
    fn snake_of_pascal_identifiers() {
        assert_eq!(to_snake("StaticAddress"), "static_address");
        assert_eq!(to_snake("SkipAdminRoleCreation"), "skip_admin_role_creation");
    }

    #[test]
    fn kebab_of_slice_operations() {
        assert_eq!(to_kebab("AddHostSets"), "add-host-sets");
        assert_eq!(to_kebab("RemoveMembers"), "remove-members");
    }

    #[test]
    fn lower_camel_of_segments() {
        assert_eq!(to_lower_camel("scope"), "scope");
        assert_eq!(to_lower_camel("host_catalog"), "hostCatalog");
        assert_eq!(to_lower_camel("auth-method"), "authMethod");
        assert_eq!(to_lower_camel("Organization"), "organization");
    }

    #[test]
    fn pluralize_appends_s() {
        assert_eq!(pluralize("target"), "targets");
        assert_eq!(pluralize("scope"), "scopes");
        assert_eq!(pluralize("auth-method"), "auth-methods");
    }

    #[test]
    fn snake_of_lower_camel_round_trips_segment() {
        assert_eq!(to_snake(&to_lower_camel("host-catalog")), "host_catalog");
    }
}
