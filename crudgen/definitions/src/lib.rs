//! crudgen Resource Definitions
//!
//! The resources of an access-management API, declared with the primitives
//! from `crudgen-define`. Each package is organized in its own module.
//!
//! ## Available Packages
//!
//! - [`scopes`] - Organization and project scopes
//! - [`targets`] - Targets and their host sets
//! - [`hostcatalogs`] - Host catalogs
//! - [`hostsets`] - Host sets inside a catalog
//! - [`hosts`] - Hosts inside a catalog
//! - [`authmethods`] - Authentication methods
//! - [`accounts`] - Accounts inside an auth method
//! - [`groups`] - Groups and their members
//! - [`roles`] - Roles, principals and grants
//! - [`users`] - Users
//!
//! ## Examples
//!
//! ```
//! use crudgen_definitions::all_resources;
//!
//! let resources = all_resources();
//! let target = resources.iter().find(|r| r.name == "Target").unwrap();
//! assert_eq!(target.package, "targets");
//! assert!(target.version_enabled);
//! ```

pub mod accounts;
pub mod authmethods;
pub mod groups;
pub mod hostcatalogs;
pub mod hosts;
pub mod hostsets;
pub mod roles;
pub mod scopes;
pub mod targets;
pub mod users;

mod common;

use crudgen_define::ResourceDefinition;

/// Every declared resource, in generation order.
pub fn all_resources() -> Vec<ResourceDefinition> {
    [
        scopes::resources(),
        targets::resources(),
        hostcatalogs::resources(),
        hostsets::resources(),
        hosts::resources(),
        authmethods::resources(),
        accounts::resources(),
        groups::resources(),
        roles::resources(),
        users::resources(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
