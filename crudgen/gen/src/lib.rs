//! crudgen code generator library.
//!
//! This crate turns [`ResourceDefinition`](crudgen_define::ResourceDefinition)s
//! into Rust client code for a scoped REST API. For every resource it writes
//! one file holding:
//!
//! - A serde struct for the resource (implementing `crudgen::Versioned` when
//!   the resource is version-enabled)
//! - A `Client` wrapping a shared `crudgen::ApiClient`
//! - One async method per declared CRUD operation
//! - `add_*`/`set_*`/`remove_*` methods for each sub-collection
//!
//! and for every package one option module with `with_*`/`default_*`
//! functions aggregated across the package's resources.
//!
//! ## Modules
//!
//! - [`paths`] - Path and argument derivation from scope chains
//! - [`options`] - Per-package option aggregation
//! - [`bindings`] - Values templates are rendered against
//! - [`codegen`] - Token generation per template
//! - [`render`] - Template dispatch, validation and formatting
//! - [`validation`] - Pre-generation checks
//! - [`output`] - The emission driver and atomic file writing
//! - [`config`] - Run configuration
//! - [`case`] - Case conversion helpers
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use crudgen_gen::config::GeneratorConfig;
//! use crudgen_gen::output::generate_all;
//!
//! let resources = crudgen_definitions::all_resources();
//! let report = generate_all(&resources, GeneratorConfig::new().base_path("generated")).unwrap();
//! println!("wrote {} files", report.len());
//! ```
//!
//! ## Generated Code Structure
//!
//! For a `Target` resource with the chain `["target"]` and a `HostSets`
//! sub-collection:
//!
//! ```text
//! pub struct Target { pub id: String, pub version: u32, ... }
//!
//! pub struct Client { client: crudgen::ApiClient }
//!
//! impl Client {
//!     pub async fn list(&self, scope_id: &str, opt: &[CallOption]) -> CallResult<Vec<Target>>;
//!     pub async fn read(&self, target_id: &str, opt: &[CallOption]) -> CallResult<Target>;
//!     pub async fn update(&self, target_id: &str, version: u32, opt: &[CallOption]) -> CallResult<Target>;
//!     pub async fn add_host_sets(&self, target_id: &str, version: u32, host_set_ids: Vec<String>, ...);
//!     ...
//! }
//! ```

pub mod bindings;
pub mod case;
pub mod codegen;
pub mod config;
pub mod errors;
pub mod options;
pub mod output;
pub mod paths;
pub mod render;
pub mod validation;
