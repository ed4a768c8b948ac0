//! crudgen Definition Library
//!
//! Types for declaring REST resources in a compact, structured way. The
//! declarations are consumed by `crudgen-gen`, which derives URL paths and
//! argument names from them and emits a typed Rust client per resource plus
//! one option module per package.
//!
//! ## Core Types
//!
//! - [`ResourceDefinition`] - One generated resource: fields, scope chain, flags
//! - [`FieldInfo`] - One resource attribute and its option settings
//! - [`FieldType`] - Semantic field types and their Rust counterparts
//! - [`Operation`] - CRUD operations a client can expose
//! - [`SliceOp`] - Sub-collection mutations (Add, Set, Remove)
//!
//! ## Examples
//!
//! ```
//! use crudgen_define::prelude::*;
//!
//! let scope = ResourceDefinition::new("Scope", "scopes", "scopes/scope.rs")
//!     .with_fields(vec![
//!         FieldInfo::new("Id", FieldType::String, "id"),
//!         FieldInfo::new("Name", FieldType::String, "name").with_option(),
//!         FieldInfo::new("Version", FieldType::U32, "version"),
//!     ])
//!     .with_path(["scope"])
//!     .with_operations(Operation::CRUD)
//!     .versioned();
//!
//! assert_eq!(scope.package, "scopes");
//! assert_eq!(scope.operations.len(), 5);
//! ```

pub mod field;
pub mod prelude;
pub mod resource;

pub use field::{FieldInfo, FieldType};
pub use resource::{Operation, ResourceDefinition, SliceOp};
