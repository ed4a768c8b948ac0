//! Host definitions.
//!
//! Hosts live inside a host catalog. Static hosts carry their address under
//! `attributes`.

use crudgen_define::{FieldInfo, FieldType, Operation, ResourceDefinition};

use crate::common;

pub fn host() -> ResourceDefinition {
    ResourceDefinition::new("Host", "hosts", "hosts/host.rs")
        .with_fields([
            common::id(),
            FieldInfo::new("HostCatalogId", FieldType::String, "host_catalog_id"),
            common::name(),
            common::description(),
            common::created_time(),
            common::updated_time(),
            common::version(),
            common::kind(),
            common::attributes(),
        ])
        .with_path(["host-catalog", "hostCatalogId", "host"])
        .with_operations(Operation::CRUD)
        .versioned()
}

/// Attributes of a static host.
pub fn static_host_attributes() -> ResourceDefinition {
    ResourceDefinition::new("StaticHostAttributes", "hosts", "hosts/static_host_attributes.rs")
        .with_fields([FieldInfo::new("Address", FieldType::String, "address").with_option()])
        .with_subtype("Static")
}

pub fn resources() -> Vec<ResourceDefinition> {
    vec![host(), static_host_attributes()]
}
