//! Error types for the crudgen generator.

use thiserror::Error;

/// Errors that can occur during code generation.
///
/// Every variant is fatal: a run stops at the first error and leaves no
/// partially-written artifact behind.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A resource definition is malformed.
    #[error("Invalid definition for resource '{resource}': {reason}")]
    InvalidDefinition { resource: String, reason: String },

    /// The scope chain does not alternate collection and id segments.
    #[error(
        "Invalid path chain for resource '{resource}': {chain:?} has {len} segments, expected an odd count",
        len = .chain.len()
    )]
    InvalidPathChain { resource: String, chain: Vec<String> },

    /// Two identifiers would collide in one generated signature.
    #[error("Argument collision in resource '{resource}': '{name}' {reason}")]
    ArgumentCollision {
        resource: String,
        name: String,
        reason: String,
    },

    /// A template needs a binding the resource does not provide.
    #[error("Template '{template}' for '{resource}' requires missing binding '{binding}'")]
    MissingBinding {
        template: String,
        resource: String,
        binding: &'static str,
    },

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl GeneratorError {
    pub(crate) fn invalid(resource: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            resource: resource.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn collision(resource: &str, name: &str, reason: impl Into<String>) -> Self {
        Self::ArgumentCollision {
            resource: resource.to_string(),
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_path_chain_reports_length() {
        let err = GeneratorError::InvalidPathChain {
            resource: "Host".to_string(),
            chain: vec!["host-catalog".to_string(), "host".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("has 2 segments"), "{msg}");
        assert!(msg.contains("Host"));
    }

    #[test]
    fn missing_binding_names_template_and_binding() {
        let err = GeneratorError::MissingBinding {
            template: "List".to_string(),
            resource: "HostSource".to_string(),
            binding: "collection_path",
        };
        assert_eq!(
            err.to_string(),
            "Template 'List' for 'HostSource' requires missing binding 'collection_path'"
        );
    }
}
