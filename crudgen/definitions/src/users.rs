//! User definitions.

use crudgen_define::{FieldInfo, FieldType, Operation, ResourceDefinition};

use crate::common;

pub fn user() -> ResourceDefinition {
    ResourceDefinition::new("User", "users", "users/user.rs")
        .with_fields(common::standard())
        .with_fields([FieldInfo::new("AccountIds", FieldType::StringList, "account_ids")])
        .with_path(["user"])
        .with_extra_options([common::recursive(), common::filter()])
        .with_operations(Operation::CRUD)
        .versioned()
}

pub fn resources() -> Vec<ResourceDefinition> {
    vec![user()]
}
