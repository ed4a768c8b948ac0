//! Auth method definitions.

use crudgen_define::{FieldInfo, FieldType, Operation, ResourceDefinition};

use crate::common;

pub fn auth_method() -> ResourceDefinition {
    ResourceDefinition::new("AuthMethod", "authmethods", "authmethods/auth_method.rs")
        .with_fields(common::standard())
        .with_fields([common::kind(), common::attributes()])
        .with_path(["auth-method"])
        .with_extra_options([common::recursive(), common::filter()])
        .with_operations(Operation::CRUD)
        .type_on_create()
        .versioned()
}

/// Attributes of a password auth method.
pub fn password_auth_method_attributes() -> ResourceDefinition {
    ResourceDefinition::new(
        "PasswordAuthMethodAttributes",
        "authmethods",
        "authmethods/password_auth_method_attributes.rs",
    )
    .with_fields([
        FieldInfo::new("MinLoginNameLength", FieldType::U32, "min_login_name_length")
            .with_option(),
        FieldInfo::new("MinPasswordLength", FieldType::U32, "min_password_length").with_option(),
    ])
    .with_subtype("Password")
}

pub fn resources() -> Vec<ResourceDefinition> {
    vec![auth_method(), password_auth_method_attributes()]
}
