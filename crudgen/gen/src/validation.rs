//! Pre-generation validation of resource definitions.
//!
//! Every definition is checked before anything is rendered, so a run either
//! fails up front or writes every artifact.
//!
//! ## Validation Checks
//!
//! - **Names**: resource, package, field and wire names are non-empty and
//!   resource/field names produce valid identifiers
//! - **Scope chain**: odd length, no empty segments, present when the
//!   resource has operations or sub-collections
//! - **Versioning**: version-enabled resources have a `Version: u32` field
//!   and a Read to resolve it with
//! - **Argument collisions**: no two parameters of one generated call share
//!   a name, and no option shadows `with_automatic_versioning`
//! - **Query options**: only scalar types are sent in a query string
//! - **Artifacts**: no two resources (or option modules) share an output path,
//!   and files placed in their package directory are usable module files
//!   other than `mod.rs`
//! - **Option modules**: after aggregation, no two options of one package
//!   generate the same `with_*`/`default_*` function
//!
//! ## Examples
//!
//! ```
//! use crudgen_define::{FieldInfo, FieldType, Operation, ResourceDefinition};
//! use crudgen_gen::validation::validate_resource;
//!
//! let group = ResourceDefinition::new("Group", "groups", "groups/group.rs")
//!     .with_fields([FieldInfo::new("Version", FieldType::U32, "version")])
//!     .with_path(["group"])
//!     .with_operations(Operation::CRUD)
//!     .with_slice_sub_type("Members", "memberIds")
//!     .versioned();
//!
//! assert!(validate_resource(&group).is_ok());
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::{Component, Path, PathBuf};

use crudgen_define::{FieldInfo, FieldType, Operation, ResourceDefinition};

use crate::case::to_snake;
use crate::codegen::create::RESOURCE_TYPE_ARG;
use crate::codegen::ident;
use crate::codegen::structure::VERSION_FIELD;
use crate::errors::GeneratorError;
use crate::options::OptionSet;
use crate::output::{PACKAGE_MODULE_FILE, package_child};
use crate::paths::derive_paths;

/// Parameter every generated call takes for its options.
const OPTIONS_PARAM: &str = "opt";

/// Parameter carrying the version in Update and slice mutations.
const VERSION_PARAM: &str = "version";

/// Name of the built-in option present in every option module.
const AUTOMATIC_VERSIONING: &str = "automatic_versioning";

/// Validates a batch of definitions, then the artifact paths they produce.
///
/// ## Errors
///
/// Returns the first error of [`validate_resource`], or
/// `GeneratorError::InvalidDefinition` if two artifacts share a path.
pub fn validate_resources(
    resources: &[ResourceDefinition],
    option_file_name: &str,
) -> Result<(), GeneratorError> {
    let mut seen: BTreeMap<PathBuf, &str> = BTreeMap::new();
    for resource in resources {
        validate_resource(resource)?;
        validate_package_child(resource)?;
        if let Some(previous) = seen.insert(resource.out_file.clone(), &resource.name) {
            return Err(GeneratorError::invalid(
                &resource.name,
                format!(
                    "out_file '{}' is already written by '{previous}'",
                    resource.out_file.display()
                ),
            ));
        }
    }

    let packages: HashSet<&str> = resources.iter().map(|r| r.package.as_str()).collect();
    for package in packages {
        let option_path = Path::new(package).join(option_file_name);
        if let Some(owner) = seen.get(&option_path) {
            return Err(GeneratorError::invalid(
                owner,
                format!(
                    "out_file '{}' collides with the option module of package '{package}'",
                    option_path.display()
                ),
            ));
        }
    }
    Ok(())
}

/// Checks that every option of a package generates distinct functions.
///
/// Options are keyed by field name during aggregation, but functions are
/// named after the subtype-prefixed option name, so `StaticAddress` and an
/// `Address` stamped with subtype `Static` would both become
/// `with_static_address`.
///
/// ## Errors
///
/// Returns `GeneratorError::ArgumentCollision` naming the package and the
/// clashing function.
pub fn validate_option_sets(sets: &[OptionSet]) -> Result<(), GeneratorError> {
    for set in sets {
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();
        for field in &set.fields {
            let fn_suffix = to_snake(&field.option_name());
            if fn_suffix == AUTOMATIC_VERSIONING {
                return Err(GeneratorError::collision(
                    &set.package,
                    &format!("with_{fn_suffix}"),
                    format!("is generated for option '{}' and is built in", field.name),
                ));
            }
            if let Some(previous) = seen.insert(fn_suffix.clone(), &field.name) {
                return Err(GeneratorError::collision(
                    &set.package,
                    &format!("with_{fn_suffix}"),
                    format!(
                        "is generated for both option '{previous}' and option '{}'",
                        field.name
                    ),
                ));
            }
        }
    }
    Ok(())
}

/// Validates one definition.
///
/// ## Errors
///
/// - `GeneratorError::InvalidDefinition` for malformed names, misplaced
///   operations, versioning without a usable version, non-scalar query
///   options or an unusable output path
/// - `GeneratorError::InvalidPathChain` for an even-length scope chain
/// - `GeneratorError::ArgumentCollision` for clashing parameter or option names
pub fn validate_resource(resource: &ResourceDefinition) -> Result<(), GeneratorError> {
    let name = resource.name.as_str();

    if name.is_empty() {
        return Err(GeneratorError::invalid("<unnamed>", "resource name is empty"));
    }
    ident(name).map_err(|_| GeneratorError::invalid(name, "name is not a valid type name"))?;
    validate_package(resource)?;
    validate_out_file(resource)?;

    for field in resource.fields.iter().chain(&resource.extra_options) {
        validate_field(name, field)?;
    }

    validate_chain(resource)?;
    validate_versioning(resource)?;
    validate_arguments(resource)?;
    validate_options(resource)?;

    Ok(())
}

fn validate_package_child(resource: &ResourceDefinition) -> Result<(), GeneratorError> {
    let out = &resource.out_file;
    if out.parent() != Some(Path::new(&resource.package)) {
        return Ok(());
    }
    if out.file_name().is_some_and(|name| name == PACKAGE_MODULE_FILE) {
        return Err(GeneratorError::invalid(
            &resource.name,
            format!(
                "out_file '{}' collides with the module file of package '{}'",
                out.display(),
                resource.package
            ),
        ));
    }
    if package_child(&resource.package, out).is_none() {
        return Err(GeneratorError::invalid(
            &resource.name,
            format!("out_file '{}' does not name a Rust module", out.display()),
        ));
    }
    Ok(())
}

fn validate_package(resource: &ResourceDefinition) -> Result<(), GeneratorError> {
    let package = resource.package.as_str();
    if package.is_empty() {
        return Err(GeneratorError::invalid(&resource.name, "package is empty"));
    }
    let mut components = Path::new(package).components();
    if !matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) {
        return Err(GeneratorError::invalid(
            &resource.name,
            format!("package '{package}' must be a single path segment"),
        ));
    }
    Ok(())
}

fn validate_out_file(resource: &ResourceDefinition) -> Result<(), GeneratorError> {
    let out = &resource.out_file;
    let relative = !out.as_os_str().is_empty()
        && out.components().all(|c| matches!(c, Component::Normal(_)));
    if !relative {
        return Err(GeneratorError::invalid(
            &resource.name,
            format!(
                "out_file '{}' must be a relative path without '..'",
                out.display()
            ),
        ));
    }
    Ok(())
}

fn validate_field(resource: &str, field: &FieldInfo) -> Result<(), GeneratorError> {
    if field.name.is_empty() {
        return Err(GeneratorError::invalid(resource, "field name is empty"));
    }
    if field.wire_name.is_empty() {
        return Err(GeneratorError::invalid(
            resource,
            format!("field '{}' has an empty wire name", field.name),
        ));
    }
    ident(&to_snake(&field.name)).map_err(|_| {
        GeneratorError::invalid(
            resource,
            format!("field '{}' does not produce a valid identifier", field.name),
        )
    })?;
    Ok(())
}

fn validate_chain(resource: &ResourceDefinition) -> Result<(), GeneratorError> {
    let chain = &resource.path_segments;

    if chain.is_empty() {
        if !resource.operations.is_empty() || !resource.slice_sub_types.is_empty() {
            return Err(GeneratorError::invalid(
                &resource.name,
                "operations and sub-collections require a path chain",
            ));
        }
        return Ok(());
    }

    if chain.len() % 2 == 0 {
        return Err(GeneratorError::InvalidPathChain {
            resource: resource.name.clone(),
            chain: chain.clone(),
        });
    }
    if chain.iter().any(|s| s.is_empty()) {
        return Err(GeneratorError::invalid(
            &resource.name,
            "path chain contains an empty segment",
        ));
    }

    let mut seen = HashSet::new();
    for op in &resource.operations {
        if !seen.insert(op) {
            return Err(GeneratorError::invalid(
                &resource.name,
                format!("operation {op} is declared twice"),
            ));
        }
    }
    Ok(())
}

fn validate_versioning(resource: &ResourceDefinition) -> Result<(), GeneratorError> {
    if !resource.version_enabled {
        return Ok(());
    }
    match resource.field(VERSION_FIELD) {
        Some(field) if field.field_type == FieldType::U32 => {}
        _ => {
            return Err(GeneratorError::invalid(
                &resource.name,
                format!("versioning requires a '{VERSION_FIELD}' field of type u32"),
            ));
        }
    }

    let mutates = resource.operations.contains(&Operation::Update)
        || !resource.slice_sub_types.is_empty();
    if mutates && !resource.operations.contains(&Operation::Read) {
        return Err(GeneratorError::invalid(
            &resource.name,
            "automatic versioning requires a Read operation",
        ));
    }
    Ok(())
}

fn validate_arguments(resource: &ResourceDefinition) -> Result<(), GeneratorError> {
    let Some(paths) = derive_paths(
        &resource.path_segments,
        resource.parent_type_name.as_deref(),
        None,
    ) else {
        return Ok(());
    };
    let name = resource.name.as_str();
    let collection_arg = to_snake(&paths.collection_arg);
    let resource_arg = to_snake(&paths.resource_arg);

    for arg in [&collection_arg, &resource_arg] {
        ident(arg).map_err(|_| {
            GeneratorError::invalid(name, format!("argument '{arg}' is not a valid identifier"))
        })?;
        if arg == OPTIONS_PARAM {
            return Err(GeneratorError::collision(
                name,
                arg,
                "clashes with the options parameter",
            ));
        }
    }

    if resource_arg == VERSION_PARAM {
        return Err(GeneratorError::collision(
            name,
            &resource_arg,
            "clashes with the version parameter",
        ));
    }

    if resource.type_on_create && collection_arg == to_snake(RESOURCE_TYPE_ARG) {
        return Err(GeneratorError::collision(
            name,
            &collection_arg,
            "clashes with the resource type parameter of Create",
        ));
    }

    for (sub_type, field) in &resource.slice_sub_types {
        let list = to_snake(field);
        ident(&list).map_err(|_| {
            GeneratorError::invalid(
                name,
                format!("sub-collection {sub_type} field '{field}' is not a valid identifier"),
            )
        })?;
        for taken in [resource_arg.as_str(), VERSION_PARAM, OPTIONS_PARAM] {
            if list == taken {
                return Err(GeneratorError::collision(
                    name,
                    &list,
                    format!("sub-collection {sub_type} list clashes with parameter '{taken}'"),
                ));
            }
        }
    }
    Ok(())
}

fn validate_options(resource: &ResourceDefinition) -> Result<(), GeneratorError> {
    let name = resource.name.as_str();
    let stamped = resource.fields.iter().filter(|f| f.generate_option).map(|f| {
        let mut f = f.clone();
        f.subtype_name = resource.subtype_name.clone();
        f
    });

    for option in stamped.chain(resource.extra_options.iter().cloned()) {
        let option_name = option.option_name();
        let fn_suffix = to_snake(&option_name);
        if fn_suffix == AUTOMATIC_VERSIONING {
            return Err(GeneratorError::collision(
                name,
                &option_name,
                "shadows the built-in automatic versioning option",
            ));
        }
        for prefix in ["with", "default"] {
            ident(&format!("{prefix}_{fn_suffix}")).map_err(|_| {
                GeneratorError::invalid(
                    name,
                    format!("option '{option_name}' does not produce a valid function name"),
                )
            })?;
        }
        if option.is_query_param && !option.field_type.is_scalar() {
            return Err(GeneratorError::invalid(
                name,
                format!(
                    "query option '{option_name}' has non-scalar type {}",
                    option.field_type
                ),
            ));
        }
    }
    Ok(())
}
