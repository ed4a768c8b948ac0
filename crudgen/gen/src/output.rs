//! Artifact assembly and file writing.
//!
//! This module drives a whole generation run: it validates the definitions,
//! renders one file per resource plus an option module and a `mod.rs` per
//! package, and writes everything under the configured base path.
//!
//! ## Output Structure
//!
//! ```text
//! <base_path>/
//! ├── targets/
//! │   ├── mod.rs        # pub mod option; pub mod target; ...
//! │   ├── target.rs     # Target struct, Client, CRUD and slice calls
//! │   └── option.rs     # with_*/default_* options of the targets package
//! └── scopes/
//!     ├── mod.rs
//!     ├── scope.rs
//!     └── option.rs
//! ```
//!
//! A consumer declares `pub mod targets;` next to the generated tree.
//!
//! ## Safety Guarantees
//!
//! - **Validation**: definitions are checked before anything is rendered
//! - **All or nothing rendering**: every artifact is rendered before the
//!   first one is written, so a template failure leaves the tree untouched
//! - **Atomic writes**: each file is written to a temp file and renamed

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crudgen_define::{ResourceDefinition, SliceOp};
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::bindings::Bindings;
use crate::codegen::ident;
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::options::OptionAggregator;
use crate::render::{Template, render};
use crate::validation::{validate_option_sets, validate_resources};

/// File name of the generated module declaring a package's files.
pub const PACKAGE_MODULE_FILE: &str = "mod.rs";

/// What an artifact holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// One resource: struct, client and calls.
    Resource,
    /// One package's option module.
    OptionModule,
    /// One package's `mod.rs`.
    PackageModule,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource => f.write_str("resource"),
            Self::OptionModule => f.write_str("option module"),
            Self::PackageModule => f.write_str("package module"),
        }
    }
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Destination, already joined with the base path.
    pub path: PathBuf,
    pub kind: ArtifactKind,
    pub content: String,
}

impl Artifact {
    /// Length of the file in bytes.
    pub fn bytes(&self) -> usize {
        self.content.len()
    }
}

/// Everything one run produced, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub artifacts: Vec<Artifact>,
    /// `true` if the artifacts were printed rather than written.
    pub dry_run: bool,
}

impl GenerationReport {
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.artifacts.iter().map(Artifact::bytes).sum()
    }

    /// Artifacts of one kind.
    pub fn of_kind(&self, kind: ArtifactKind) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter().filter(move |a| a.kind == kind)
    }
}

/// Orchestrates one generation run.
///
/// ## Examples
///
/// ```
/// use crudgen_define::{FieldInfo, FieldType, Operation, ResourceDefinition};
/// use crudgen_gen::config::GeneratorConfig;
/// use crudgen_gen::output::Generator;
///
/// let user = ResourceDefinition::new("User", "users", "users/user.rs")
///     .with_fields([FieldInfo::new("Name", FieldType::String, "name").with_option()])
///     .with_path(["user"])
///     .with_operations([Operation::Read]);
///
/// let artifacts = Generator::new(GeneratorConfig::new().base_path("out"))
///     .render_all(&[user])
///     .unwrap();
///
/// assert_eq!(artifacts.len(), 3);
/// assert!(artifacts[0].content.contains("pub async fn read("));
/// assert!(artifacts[1].content.contains("pub fn with_name("));
/// assert!(artifacts[2].content.contains("pub mod user;"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validates and renders every artifact without touching the filesystem.
    ///
    /// Resources come first, in input order, followed by one option module
    /// per package and then one `mod.rs` per package, both in ascending
    /// package order.
    ///
    /// A package's `mod.rs` declares the resource files placed directly in
    /// the package directory plus its option module.
    ///
    /// ## Errors
    ///
    /// Returns the first validation or rendering error.
    pub fn render_all(
        &self,
        resources: &[ResourceDefinition],
    ) -> Result<Vec<Artifact>, GeneratorError> {
        self.config.validate()?;
        validate_resources(resources, &self.config.option_file_name)?;

        let mut aggregator = OptionAggregator::new();
        let mut modules: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut artifacts = Vec::with_capacity(resources.len());

        for resource in resources {
            let content = render_resource(resource)?;
            aggregator.accumulate(resource);
            let children = modules.entry(resource.package.clone()).or_default();
            if let Some(module) = package_child(&resource.package, &resource.out_file) {
                children.push(module);
            }
            artifacts.push(Artifact {
                path: self.config.base_path.join(&resource.out_file),
                kind: ArtifactKind::Resource,
                content,
            });
        }

        let sets = aggregator.finalize();
        validate_option_sets(&sets)?;

        debug!(packages = sets.len(), "rendering option modules");
        let option_module = module_name(Path::new(&self.config.option_file_name));
        for set in &sets {
            let content = render(&Template::OptionModule, &Bindings::for_options(set))?;
            if let Some(module) = &option_module {
                modules.entry(set.package.clone()).or_default().push(module.clone());
            }
            artifacts.push(Artifact {
                path: self
                    .config
                    .base_path
                    .join(&set.package)
                    .join(&self.config.option_file_name),
                kind: ArtifactKind::OptionModule,
                content,
            });
        }

        for (package, children) in modules {
            if children.is_empty() {
                continue;
            }
            let content = render(
                &Template::PackageModule,
                &Bindings::for_package(&package, children),
            )?;
            artifacts.push(Artifact {
                path: self
                    .config
                    .base_path
                    .join(&package)
                    .join(PACKAGE_MODULE_FILE),
                kind: ArtifactKind::PackageModule,
                content,
            });
        }

        Ok(artifacts)
    }

    /// Renders every artifact, then writes (or, in dry-run mode, prints) them.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The configuration or a definition is invalid
    /// - A template fails to render
    /// - A file cannot be written
    pub fn run(&self, resources: &[ResourceDefinition]) -> Result<GenerationReport, GeneratorError> {
        let artifacts = self.render_all(resources)?;

        if self.config.dry_run {
            for artifact in &artifacts {
                println!("=== {} ===\n{}\n", artifact.path.display(), artifact.content);
            }
        } else {
            for artifact in &artifacts {
                write_atomic(&artifact.path, &artifact.content)?;
                info!(
                    path = %artifact.path.display(),
                    kind = %artifact.kind,
                    bytes = artifact.bytes(),
                    "wrote artifact"
                );
            }
        }

        Ok(GenerationReport {
            artifacts,
            dry_run: self.config.dry_run,
        })
    }
}

/// Generates and writes artifacts for `resources` with `config`.
///
/// Shorthand for `Generator::new(config).run(resources)`.
///
/// ## Errors
///
/// See [`Generator::run`].
pub fn generate_all(
    resources: &[ResourceDefinition],
    config: GeneratorConfig,
) -> Result<GenerationReport, GeneratorError> {
    Generator::new(config).run(resources)
}

/// Renders the file of one resource.
///
/// The struct always comes first. A resource with operations or
/// sub-collections then gets its `Client`, each declared operation in order,
/// and Add/Set/Remove for every sub-collection (sub-collections in key order
/// within each mutation).
///
/// ## Errors
///
/// Returns the first rendering error.
pub fn render_resource(resource: &ResourceDefinition) -> Result<String, GeneratorError> {
    let bindings = Bindings::for_resource(resource);

    let mut templates = vec![Template::Struct];
    if resource.has_client() {
        templates.push(Template::Client);
    }
    templates.extend(resource.operations.iter().copied().map(Template::Operation));
    for op in SliceOp::iter() {
        for (sub_type, field) in &resource.slice_sub_types {
            templates.push(Template::SliceMutation {
                op,
                sub_type: sub_type.clone(),
                field: field.clone(),
            });
        }
    }

    let pieces = templates
        .iter()
        .map(|t| render(t, &bindings))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(pieces.join("\n"))
}

/// Module name of a generated file: the stem of a `.rs` file that is a
/// valid module identifier. `mod.rs` has none.
pub fn module_name(file: &Path) -> Option<String> {
    if file.extension()? != "rs" {
        return None;
    }
    let stem = file.file_stem()?.to_str()?;
    if stem == "mod" || ident(stem).is_err() {
        return None;
    }
    Some(stem.to_string())
}

/// Module name of `file` if it sits directly in the `package` directory.
pub(crate) fn package_child(package: &str, file: &Path) -> Option<String> {
    if file.parent()? != Path::new(package) {
        return None;
    }
    module_name(file)
}

/// Replaces `path` with `content` through a sibling temp file and a rename.
///
/// Readers see either the old file or the new one, never a partial write.
/// The temp file is `<name>.tmp` next to the destination and is removed if
/// the rename fails.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` naming the directory, temp file or
/// destination that could not be created, written or replaced.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error(parent))?;
    }

    let temp = temp_path(path);
    fs::write(&temp, content).map_err(write_error(&temp))?;
    if let Err(source) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(write_error(path)(source));
    }

    debug!(path = %path.display(), bytes = content.len(), "replaced file");
    Ok(())
}

/// `target.rs` -> `target.rs.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_error(at: &Path) -> impl FnOnce(std::io::Error) -> GeneratorError + '_ {
    move |source| GeneratorError::WriteError {
        path: at.display().to_string(),
        source,
    }
}
