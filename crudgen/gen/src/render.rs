//! Template rendering.
//!
//! [`render`] binds a [`Template`] to [`Bindings`] and returns formatted Rust
//! source. Every template is checked with `syn` before formatting, so a
//! rendered fragment always parses as a Rust file on its own.

use std::fmt;

use crudgen_define::{Operation, SliceOp};
use proc_macro2::TokenStream;
use tracing::debug;

use crate::bindings::Bindings;
use crate::codegen;
use crate::errors::GeneratorError;

/// Header prepended to every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by crudgen-gen. DO NOT EDIT.\n\n";

/// A named code template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// The resource struct. Starts a resource file, so it carries the header.
    Struct,
    /// The `Client` wrapper.
    Client,
    /// One CRUD call.
    Operation(Operation),
    /// One mutation of one sub-collection.
    SliceMutation {
        op: SliceOp,
        sub_type: String,
        field: String,
    },
    /// A package option module. Carries the header.
    OptionModule,
    /// A package `mod.rs`. Carries the header.
    PackageModule,
}

impl Template {
    fn has_header(&self) -> bool {
        matches!(self, Self::Struct | Self::OptionModule | Self::PackageModule)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.write_str("Struct"),
            Self::Client => f.write_str("Client"),
            Self::Operation(op) => write!(f, "{op}"),
            Self::SliceMutation { op, sub_type, .. } => {
                f.write_str(&codegen::slice::operation_name(*op, sub_type))
            }
            Self::OptionModule => f.write_str("OptionModule"),
            Self::PackageModule => f.write_str("PackageModule"),
        }
    }
}

/// Renders `template` against `bindings`.
///
/// ## Errors
///
/// - `GeneratorError::MissingBinding` if the template needs a binding the
///   resource lacks (a CRUD call on a resource without a scope chain)
/// - `GeneratorError::CodeGenError` if the generated tokens do not parse
pub fn render(template: &Template, bindings: &Bindings) -> Result<String, GeneratorError> {
    let tokens = match template {
        Template::Struct => codegen::generate_struct(bindings)?,
        Template::Client => codegen::generate_client(bindings)?,
        Template::Operation(Operation::List) => codegen::generate_list(bindings)?,
        Template::Operation(Operation::Read) => codegen::generate_read(bindings)?,
        Template::Operation(Operation::Create) => codegen::generate_create(bindings)?,
        Template::Operation(Operation::Update) => codegen::generate_update(bindings)?,
        Template::Operation(Operation::Delete) => codegen::generate_delete(bindings)?,
        Template::SliceMutation {
            op,
            sub_type,
            field,
        } => codegen::generate_slice_mutation(bindings, *op, sub_type, field)?,
        Template::OptionModule => codegen::generate_option_module(bindings)?,
        Template::PackageModule => codegen::generate_package_module(bindings)?,
    };

    let formatted = format_tokens(&tokens).map_err(|e| {
        GeneratorError::CodeGenError(format!(
            "template '{template}' for '{}' produced invalid code: {e}",
            bindings.name
        ))
    })?;
    debug!(template = %template, resource = %bindings.name, bytes = formatted.len(), "rendered");

    if template.has_header() {
        Ok(format!("{GENERATED_HEADER}{formatted}"))
    } else {
        Ok(formatted)
    }
}

/// Validates tokens as a Rust file and formats them with `prettyplease`.
///
/// ## Errors
///
/// Returns the `syn` error message if the tokens do not parse.
pub fn format_tokens(tokens: &TokenStream) -> Result<String, String> {
    let file = syn::parse2::<syn::File>(tokens.clone()).map_err(|e| e.to_string())?;
    Ok(prettyplease::unparse(&file))
}
