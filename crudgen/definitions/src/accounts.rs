//! Account definitions.
//!
//! Accounts belong to an auth method. Password accounts carry their login
//! name and password under `attributes`.

use crudgen_define::{FieldInfo, FieldType, Operation, ResourceDefinition};

use crate::common;

pub fn account() -> ResourceDefinition {
    ResourceDefinition::new("Account", "accounts", "accounts/account.rs")
        .with_fields([
            common::id(),
            FieldInfo::new("AuthMethodId", FieldType::String, "auth_method_id"),
            common::name(),
            common::description(),
            common::created_time(),
            common::updated_time(),
            common::version(),
            common::kind(),
            common::attributes(),
        ])
        .with_path(["auth-method", "authMethodId", "account"])
        .with_operations(Operation::CRUD)
        .versioned()
}

pub fn password_account_attributes() -> ResourceDefinition {
    ResourceDefinition::new(
        "PasswordAccountAttributes",
        "accounts",
        "accounts/password_account_attributes.rs",
    )
    .with_fields([
        FieldInfo::new("LoginName", FieldType::String, "login_name").with_option(),
        FieldInfo::new("Password", FieldType::String, "password").with_option(),
    ])
    .with_subtype("Password")
}

pub fn resources() -> Vec<ResourceDefinition> {
    vec![account(), password_account_attributes()]
}
