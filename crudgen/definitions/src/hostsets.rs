//! Host set definitions.
//!
//! Host sets live inside a host catalog and group the catalog's hosts.

use crudgen_define::{FieldInfo, FieldType, Operation, ResourceDefinition};

use crate::common;

/// Creates the host set resource.
///
/// ## Examples
///
/// ```
/// use crudgen_definitions::hostsets::host_set;
///
/// let set = host_set();
/// assert_eq!(set.path_segments, ["host-catalog", "hostCatalogId", "host-set"]);
/// ```
pub fn host_set() -> ResourceDefinition {
    ResourceDefinition::new("HostSet", "hostsets", "hostsets/host_set.rs")
        .with_fields([
            common::id(),
            FieldInfo::new("HostCatalogId", FieldType::String, "host_catalog_id"),
            common::name(),
            common::description(),
            common::created_time(),
            common::updated_time(),
            common::version(),
            common::kind(),
            FieldInfo::new("HostIds", FieldType::StringList, "host_ids"),
        ])
        .with_path(["host-catalog", "hostCatalogId", "host-set"])
        .with_operations(Operation::CRUD)
        .with_slice_sub_type("Hosts", "hostIds")
        .versioned()
}

pub fn resources() -> Vec<ResourceDefinition> {
    vec![host_set()]
}
