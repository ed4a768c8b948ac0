//! Group definitions.

use crudgen_define::{FieldInfo, FieldType, Operation, ResourceDefinition};

use crate::common;

/// Creates the group resource.
///
/// Members are managed through `add_members`/`set_members`/`remove_members`.
pub fn group() -> ResourceDefinition {
    ResourceDefinition::new("Group", "groups", "groups/group.rs")
        .with_fields(common::standard())
        .with_fields([FieldInfo::new("MemberIds", FieldType::StringList, "member_ids")])
        .with_path(["group"])
        .with_extra_options([common::recursive(), common::filter()])
        .with_operations(Operation::CRUD)
        .with_slice_sub_type("Members", "memberIds")
        .versioned()
}

pub fn resources() -> Vec<ResourceDefinition> {
    vec![group()]
}
