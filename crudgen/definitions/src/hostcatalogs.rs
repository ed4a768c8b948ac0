//! Host catalog definitions.

use crudgen_define::{Operation, ResourceDefinition};

use crate::common;

pub fn host_catalog() -> ResourceDefinition {
    ResourceDefinition::new("HostCatalog", "hostcatalogs", "hostcatalogs/host_catalog.rs")
        .with_fields(common::standard())
        .with_fields([common::kind(), common::attributes()])
        .with_path(["host-catalog"])
        .with_extra_options([common::recursive(), common::filter()])
        .with_operations(Operation::CRUD)
        .type_on_create()
        .versioned()
}

pub fn resources() -> Vec<ResourceDefinition> {
    vec![host_catalog()]
}
