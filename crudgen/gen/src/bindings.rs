//! Values bound into templates.

use std::collections::BTreeMap;

use crudgen_define::{FieldInfo, ResourceDefinition};

use crate::errors::GeneratorError;
use crate::options::OptionSet;
use crate::paths::{derive_paths, DerivedPaths};

/// Everything a template may read about one resource or package.
///
/// Built once per resource by the driver. `paths` is `None` for resources
/// without a scope chain; templates that need it fail with
/// [`GeneratorError::MissingBinding`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    /// Resource type name, or the package name for option modules.
    pub name: String,
    pub package: String,
    pub fields: Vec<FieldInfo>,
    pub path_args: Vec<String>,
    pub paths: Option<DerivedPaths>,
    pub parent_type_name: Option<String>,
    pub slice_sub_types: BTreeMap<String, String>,
    pub version_enabled: bool,
    pub type_on_create: bool,
    /// Child modules of a package module, sorted.
    pub modules: Vec<String>,
}

impl Bindings {
    pub fn for_resource(resource: &ResourceDefinition) -> Self {
        let paths = derive_paths(
            &resource.path_segments,
            resource.parent_type_name.as_deref(),
            None,
        );
        Self {
            name: resource.name.clone(),
            package: resource.package.clone(),
            fields: resource.fields.clone(),
            path_args: resource.path_segments.clone(),
            paths,
            parent_type_name: resource.parent_type_name.clone(),
            slice_sub_types: resource.slice_sub_types.clone(),
            version_enabled: resource.version_enabled,
            type_on_create: resource.type_on_create,
            modules: Vec::new(),
        }
    }

    /// Bindings for a package option module: only `package` and the sorted
    /// option fields are set.
    pub fn for_options(set: &OptionSet) -> Self {
        Self {
            name: set.package.clone(),
            package: set.package.clone(),
            fields: set.fields.clone(),
            path_args: Vec::new(),
            paths: None,
            parent_type_name: None,
            slice_sub_types: BTreeMap::new(),
            version_enabled: false,
            type_on_create: false,
            modules: Vec::new(),
        }
    }

    /// Bindings for a package's `mod.rs`: `package` and its child modules.
    pub fn for_package(package: &str, modules: impl IntoIterator<Item = String>) -> Self {
        let mut modules: Vec<String> = modules.into_iter().collect();
        modules.sort();
        modules.dedup();
        Self {
            name: package.to_string(),
            package: package.to_string(),
            fields: Vec::new(),
            path_args: Vec::new(),
            paths: None,
            parent_type_name: None,
            slice_sub_types: BTreeMap::new(),
            version_enabled: false,
            type_on_create: false,
            modules,
        }
    }

    /// Derived paths, or `MissingBinding` naming `template`.
    pub fn require_paths(&self, template: &str) -> Result<&DerivedPaths, GeneratorError> {
        self.paths.as_ref().ok_or_else(|| GeneratorError::MissingBinding {
            template: template.to_string(),
            resource: self.name.clone(),
            binding: "paths",
        })
    }
}
