//! Convenient re-exports for writing resource definitions.

pub use crate::field::{FieldInfo, FieldType};
pub use crate::resource::{Operation, ResourceDefinition, SliceOp};
