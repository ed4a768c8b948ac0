//! Target definitions.
//!
//! A target is an endpoint users connect to through host sets. Its type is
//! chosen at creation; TCP targets carry a default port in `attributes`.

use crudgen_define::{FieldInfo, FieldType, Operation, ResourceDefinition};

use crate::common;

/// Creates the target resource.
///
/// ## Examples
///
/// ```
/// use crudgen_definitions::targets::target;
///
/// let target = target();
/// assert!(target.type_on_create);
/// assert_eq!(target.slice_sub_types["HostSets"], "hostSetIds");
/// ```
pub fn target() -> ResourceDefinition {
    ResourceDefinition::new("Target", "targets", "targets/target.rs")
        .with_fields(common::standard())
        .with_fields([
            common::kind(),
            FieldInfo::new("HostSetIds", FieldType::StringList, "host_set_ids"),
            FieldInfo::new("SessionMaxSeconds", FieldType::U32, "session_max_seconds")
                .with_option(),
            FieldInfo::new(
                "SessionConnectionLimit",
                FieldType::I64,
                "session_connection_limit",
            )
            .with_option(),
            FieldInfo::new("WorkerFilter", FieldType::String, "worker_filter").with_option(),
            common::attributes(),
        ])
        .with_path(["target"])
        .with_extra_options([common::recursive(), common::filter()])
        .with_operations(Operation::CRUD)
        .with_slice_sub_type("HostSets", "hostSetIds")
        .type_on_create()
        .versioned()
}

/// Attributes of a TCP target, written under `attributes`.
pub fn tcp_target_attributes() -> ResourceDefinition {
    ResourceDefinition::new(
        "TcpTargetAttributes",
        "targets",
        "targets/tcp_target_attributes.rs",
    )
    .with_fields([FieldInfo::new("DefaultPort", FieldType::U32, "default_port").with_option()])
    .with_subtype("Tcp")
}

/// A host set as seen from a target.
pub fn host_set_reference() -> ResourceDefinition {
    ResourceDefinition::new("HostSetReference", "targets", "targets/host_set_reference.rs")
        .with_fields([
            common::id(),
            FieldInfo::new("HostCatalogId", FieldType::String, "host_catalog_id"),
        ])
        .output_only()
}

pub fn resources() -> Vec<ResourceDefinition> {
    vec![target(), tcp_target_attributes(), host_set_reference()]
}
