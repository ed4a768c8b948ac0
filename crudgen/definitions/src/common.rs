//! Fields shared by most resources.

use crudgen_define::{FieldInfo, FieldType};

pub(crate) fn id() -> FieldInfo {
    FieldInfo::new("Id", FieldType::String, "id")
}

pub(crate) fn scope_id() -> FieldInfo {
    FieldInfo::new("ScopeId", FieldType::String, "scope_id")
}

pub(crate) fn kind() -> FieldInfo {
    FieldInfo::new("Type", FieldType::String, "type")
}

pub(crate) fn name() -> FieldInfo {
    FieldInfo::new("Name", FieldType::String, "name").with_option()
}

pub(crate) fn description() -> FieldInfo {
    FieldInfo::new("Description", FieldType::String, "description").with_option()
}

pub(crate) fn created_time() -> FieldInfo {
    FieldInfo::new("CreatedTime", FieldType::String, "created_time")
}

pub(crate) fn updated_time() -> FieldInfo {
    FieldInfo::new("UpdatedTime", FieldType::String, "updated_time")
}

pub(crate) fn version() -> FieldInfo {
    FieldInfo::new("Version", FieldType::U32, "version")
}

pub(crate) fn attributes() -> FieldInfo {
    FieldInfo::new("Attributes", FieldType::Map, "attributes")
}

/// Query option narrowing List to a server-side filter expression.
pub(crate) fn filter() -> FieldInfo {
    FieldInfo::new("Filter", FieldType::String, "filter")
        .with_option()
        .query()
}

/// Query option making List descend into child scopes.
pub(crate) fn recursive() -> FieldInfo {
    FieldInfo::new("Recursive", FieldType::Bool, "recursive")
        .with_option()
        .query()
}

/// The fields every top-level resource starts with.
pub(crate) fn standard() -> Vec<FieldInfo> {
    vec![
        id(),
        scope_id(),
        name(),
        description(),
        created_time(),
        updated_time(),
        version(),
    ]
}
