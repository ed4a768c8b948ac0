//! Resource definitions.
//!
//! A [`ResourceDefinition`] is the unit of generation: one generated file per
//! definition, holding the resource struct and, when the resource is
//! addressable, its client and CRUD operations.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::field::FieldInfo;

/// CRUD operations a resource client can expose.
///
/// The order in [`ResourceDefinition::operations`] is the order the
/// functions appear in the generated file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum Operation {
    /// `GET <collection>` scoped by the collection argument.
    List,
    /// `GET <collection>/<id>`.
    Read,
    /// `POST <collection>` scoped by the collection argument.
    Create,
    /// `PATCH <collection>/<id>` with a version.
    Update,
    /// `DELETE <collection>/<id>`.
    Delete,
}

impl Operation {
    /// The five CRUD operations in their conventional emission order.
    pub const CRUD: [Operation; 5] = [
        Operation::Create,
        Operation::Read,
        Operation::Update,
        Operation::Delete,
        Operation::List,
    ];
}

/// Mutations generated for every declared sub-collection.
///
/// Iteration order (`Add`, `Set`, `Remove`) is the emission order.
///
/// ## Examples
///
/// ```
/// use crudgen_define::SliceOp;
/// use strum::IntoEnumIterator;
///
/// let ops: Vec<String> = SliceOp::iter().map(|op| op.to_string()).collect();
/// assert_eq!(ops, ["Add", "Set", "Remove"]);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum SliceOp {
    /// Appends identifiers to the sub-collection.
    Add,
    /// Replaces the sub-collection; an empty list clears it.
    Set,
    /// Removes identifiers from the sub-collection.
    Remove,
}

/// A complete description of one generated resource.
///
/// ## Path segments
///
/// `path_segments` is the scope chain leading to the resource, alternating
/// collection names and parent identifier placeholders and ending with the
/// resource's own collection name:
///
/// ```text
/// ["scope"]                              top-level, scoped by `scopeId`
/// ["organization", "orgId", "project"]   projects under an organization
/// ```
///
/// ## Examples
///
/// ```
/// use crudgen_define::{FieldInfo, FieldType, Operation, ResourceDefinition};
///
/// let target = ResourceDefinition::new("Target", "targets", "targets/target.rs")
///     .with_fields(vec![
///         FieldInfo::new("Id", FieldType::String, "id"),
///         FieldInfo::new("Name", FieldType::String, "name").with_option(),
///         FieldInfo::new("Version", FieldType::U32, "version"),
///     ])
///     .with_path(["target"])
///     .with_operations(Operation::CRUD)
///     .with_slice_sub_type("HostSets", "hostSetIds")
///     .versioned();
///
/// assert!(target.has_client());
/// assert_eq!(target.slice_sub_types["HostSets"], "hostSetIds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// Generated type name (e.g. `Target`).
    pub name: String,
    /// Emission namespace; one option module is generated per package.
    pub package: String,
    /// Fields of the resource, in declaration order.
    pub fields: Vec<FieldInfo>,
    /// Scope chain (see the type-level docs). Empty for nested value types.
    #[serde(default)]
    pub path_segments: Vec<String>,
    /// Parent type used to name the scoping argument of single-segment chains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_type_name: Option<String>,
    /// Options merged into the package unconditionally.
    #[serde(default)]
    pub extra_options: Vec<FieldInfo>,
    /// Sub-collection type name to list-field name (drives Add/Set/Remove).
    #[serde(default)]
    pub slice_sub_types: BTreeMap<String, String>,
    /// Whether Update and slice mutations support automatic versioning.
    #[serde(default)]
    pub version_enabled: bool,
    /// Whether Create takes an explicit resource type argument.
    #[serde(default)]
    pub type_on_create: bool,
    /// Read-only resource: its fields never become options.
    #[serde(default)]
    pub output_only: bool,
    /// Subtype stamped onto this resource's options (e.g. `Static`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype_name: Option<String>,
    /// Operations rendered for this resource, in order.
    #[serde(default)]
    pub operations: Vec<Operation>,
    /// Output path relative to the generation base path.
    pub out_file: PathBuf,
}

impl ResourceDefinition {
    /// Creates an empty definition with no fields, chain or operations.
    pub fn new(
        name: impl Into<String>,
        package: impl Into<String>,
        out_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            fields: Vec::new(),
            path_segments: Vec::new(),
            parent_type_name: None,
            extra_options: Vec::new(),
            slice_sub_types: BTreeMap::new(),
            version_enabled: false,
            type_on_create: false,
            output_only: false,
            subtype_name: None,
            operations: Vec::new(),
            out_file: out_file.into(),
        }
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldInfo>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn with_path<S: Into<String>>(mut self, segments: impl IntoIterator<Item = S>) -> Self {
        self.path_segments = segments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_parent_type(mut self, parent: impl Into<String>) -> Self {
        self.parent_type_name = Some(parent.into());
        self
    }

    pub fn with_extra_options(mut self, options: impl IntoIterator<Item = FieldInfo>) -> Self {
        self.extra_options.extend(options);
        self
    }

    pub fn with_slice_sub_type(
        mut self,
        sub_type: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        self.slice_sub_types.insert(sub_type.into(), field.into());
        self
    }

    pub fn with_operations(mut self, operations: impl IntoIterator<Item = Operation>) -> Self {
        self.operations.extend(operations);
        self
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype_name = Some(subtype.into());
        self
    }

    pub fn versioned(mut self) -> Self {
        self.version_enabled = true;
        self
    }

    pub fn type_on_create(mut self) -> Self {
        self.type_on_create = true;
        self
    }

    pub fn output_only(mut self) -> Self {
        self.output_only = true;
        self
    }

    /// Returns `true` when a client struct is generated for this resource.
    pub fn has_client(&self) -> bool {
        !self.operations.is_empty() || !self.slice_sub_types.is_empty()
    }

    /// Looks up a field by its type-level name.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|f| f.name == name)
    }
}
