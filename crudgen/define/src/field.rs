//! Field declarations for generated resources.
//!
//! A [`FieldInfo`] describes one attribute of a resource: the Rust-facing
//! identifier, its semantic type, the key used on the wire, and whether the
//! generator should emit a `with_*`/`default_*` option for it.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Semantic type of a resource field.
///
/// Each variant maps to exactly one Rust type in generated code and to one
/// JSON representation on the wire.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use crudgen_define::FieldType;
///
/// assert_eq!(FieldType::from_str("string_list").unwrap(), FieldType::StringList);
/// assert_eq!(FieldType::StringList.rust_type(), "Vec<String>");
/// assert_eq!(FieldType::Bool.to_string(), "bool");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldType {
    /// UTF-8 string.
    #[default]
    String,
    /// Boolean flag.
    Bool,
    /// Unsigned 32-bit integer (versions, counts).
    U32,
    /// Unsigned 64-bit integer.
    U64,
    /// Signed 64-bit integer.
    I64,
    /// List of strings (identifier lists, grant strings).
    StringList,
    /// Free-form JSON object.
    Map,
}

impl FieldType {
    /// Returns the Rust type used for this field in generated code.
    ///
    /// Paths are spelled the way generated files see them, through the
    /// `crudgen` runtime's re-exports.
    pub fn rust_type(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Bool => "bool",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::StringList => "Vec<String>",
            Self::Map => "crudgen::serde_json::Map<String, crudgen::serde_json::Value>",
        }
    }

    /// Returns `true` if values of this type can be rendered into a query
    /// string with `Display`.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::StringList | Self::Map)
    }
}

/// One attribute of a resource.
///
/// ## Examples
///
/// ```
/// use crudgen_define::{FieldInfo, FieldType};
///
/// let field = FieldInfo::new("Address", FieldType::String, "address")
///     .with_option()
///     .in_subtype("Static");
///
/// assert!(field.generate_option);
/// assert!(field.is_attribute());
/// assert_eq!(field.option_name(), "StaticAddress");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    /// Type-level identifier in CamelCase (e.g. `HostSetIds`).
    pub name: String,
    /// Semantic type of the field.
    pub field_type: FieldType,
    /// Serialized key (e.g. `host_set_ids`).
    pub wire_name: String,
    /// Whether a setter/default option is emitted for this field.
    #[serde(default)]
    pub generate_option: bool,
    /// Set when the field lives inside the nested `attributes` object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype_name: Option<String>,
    /// Whether the option writes to the query string instead of the body.
    #[serde(default)]
    pub is_query_param: bool,
}

impl FieldInfo {
    /// Creates a plain field that does not generate an option.
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        wire_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            wire_name: wire_name.into(),
            generate_option: false,
            subtype_name: None,
            is_query_param: false,
        }
    }

    /// Marks the field as exposed through the package option module.
    pub fn with_option(mut self) -> Self {
        self.generate_option = true;
        self
    }

    /// Marks the option as a query-string parameter.
    pub fn query(mut self) -> Self {
        self.is_query_param = true;
        self
    }

    /// Places the field inside the `attributes` object of the given subtype.
    pub fn in_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype_name = Some(subtype.into());
        self
    }

    /// Returns `true` when the field is written under `attributes`.
    pub fn is_attribute(&self) -> bool {
        self.subtype_name.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Name of the generated option: subtype prefix followed by the field name.
    pub fn option_name(&self) -> String {
        format!("{}{}", self.subtype_name.as_deref().unwrap_or_default(), self.name)
    }
}
