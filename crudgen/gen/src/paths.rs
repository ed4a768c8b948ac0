//! Path and argument derivation from scope chains.
//!
//! A scope chain alternates collection names and parent identifier
//! placeholders, ending with the resource's own collection name:
//!
//! ```text
//! ["scope"]                              index 0: collection
//! ["organization", "orgId", "project"]   index 1: parent id placeholder
//! ```
//!
//! From a chain this module derives the four names every CRUD template
//! needs: the collection argument (scopes List/Create), the resource
//! argument (scopes Read/Update/Delete), the collection path and the
//! resource path template.

use std::fmt;

use crate::case::{pluralize, to_lower_camel};

/// Collection argument used by single-segment chains without a parent type.
pub const DEFAULT_SCOPE: &str = "scope";

/// One piece of a [`PathTemplate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPart {
    /// Fixed text, emitted verbatim.
    Literal(String),
    /// A substitution site, named after the argument that fills it.
    Arg(String),
}

/// A URL path with named substitution sites and an optional action suffix.
///
/// ## Examples
///
/// ```
/// use crudgen_gen::paths::to_path;
///
/// let path = to_path(&["organization", "orgId", "project"], Some("archive"));
/// assert_eq!(path.format_string(), "organization/{}/project:archive");
/// assert_eq!(path.args(), vec!["orgId"]);
/// assert_eq!(path.expand(&["o_123"]).unwrap(), "organization/o_123/project:archive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    parts: Vec<PathPart>,
    action: Option<String>,
}

impl PathTemplate {
    /// A template with no substitution sites.
    pub fn literal(path: impl Into<String>) -> Self {
        Self {
            parts: vec![PathPart::Literal(path.into())],
            action: None,
        }
    }

    /// Returns a copy of this template with `action` appended as `:<action>`.
    ///
    /// Any existing action is replaced; a template never carries two.
    pub fn with_action(&self, action: impl Into<String>) -> Self {
        Self {
            parts: self.parts.clone(),
            action: Some(action.into()),
        }
    }

    pub fn parts(&self) -> &[PathPart] {
        &self.parts
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Number of `{}` sites in [`Self::format_string`].
    pub fn substitution_sites(&self) -> usize {
        self.parts
            .iter()
            .filter(|p| matches!(p, PathPart::Arg(_)))
            .count()
    }

    /// Argument names, in substitution order.
    pub fn args(&self) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                PathPart::Arg(name) => Some(name.as_str()),
                PathPart::Literal(_) => None,
            })
            .collect()
    }

    pub fn is_literal(&self) -> bool {
        self.substitution_sites() == 0
    }

    /// The path as a `format!` template, `{}` at each substitution site.
    pub fn format_string(&self) -> String {
        self.render(|_| "{}".to_string())
    }

    /// Fills the substitution sites with `values`, in order.
    ///
    /// Returns `None` if the number of values does not match
    /// [`Self::substitution_sites`].
    pub fn expand(&self, values: &[&str]) -> Option<String> {
        if values.len() != self.substitution_sites() {
            return None;
        }
        let mut values = values.iter();
        Some(self.render(|_| values.next().map(|v| v.to_string()).unwrap_or_default()))
    }

    fn render(&self, mut arg: impl FnMut(&str) -> String) -> String {
        let mut out = self
            .parts
            .iter()
            .map(|p| match p {
                PathPart::Literal(text) => text.clone(),
                PathPart::Arg(name) => arg(name),
            })
            .collect::<Vec<_>>()
            .join("/");
        if let Some(action) = &self.action {
            out.push(':');
            out.push_str(action);
        }
        out
    }
}

impl fmt::Display for PathTemplate {
    /// Human-readable form with named sites: `projects/{projectId}:archive`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|name| format!("{{{name}}}")))
    }
}

/// Builds a path template from a full alternating chain.
///
/// Every odd-positioned segment becomes a substitution site, segments are
/// joined with `/`, and the action (if any) goes after everything. A chain
/// of one segment is a plain literal.
pub fn to_path<S: AsRef<str>>(segments: &[S], action: Option<&str>) -> PathTemplate {
    let parts = if let [only] = segments {
        vec![PathPart::Literal(only.as_ref().to_string())]
    } else {
        segments
            .iter()
            .enumerate()
            .map(|(i, seg)| {
                let seg = seg.as_ref().to_string();
                if i % 2 == 1 {
                    PathPart::Arg(seg)
                } else {
                    PathPart::Literal(seg)
                }
            })
            .collect()
    };
    PathTemplate {
        parts,
        action: action.filter(|a| !a.is_empty()).map(str::to_string),
    }
}

/// Names and paths derived from one scope chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPaths {
    /// Argument scoping List and Create (e.g. `scopeId`, `orgId`).
    pub collection_arg: String,
    /// Argument identifying one resource (e.g. `targetId`).
    pub resource_arg: String,
    /// Collection endpoint (e.g. `projects`).
    pub collection_path: String,
    /// Resource endpoint, one site filled by the resource argument.
    pub resource_path: PathTemplate,
}

impl DerivedPaths {
    /// Collection path with an explicit action suffix.
    ///
    /// Never applied implicitly; generated List and Create use the bare
    /// collection path.
    pub fn collection_path_with_action(&self, action: &str) -> String {
        format!("{}:{action}", self.collection_path)
    }

    /// Resource path with `action` appended (slice mutations).
    pub fn resource_path_with_action(&self, action: &str) -> PathTemplate {
        self.resource_path.with_action(action)
    }
}

/// Derives argument names and paths from a scope chain.
///
/// Returns `None` for an empty chain: such a resource is a plain value type
/// and gets no client.
///
/// - One segment `S`: the collection argument is named after
///   `parent_type_name` (or `scope`).
/// - More segments: the collection argument is the parent's id placeholder
///   (second-to-last segment).
///
/// In both cases the collection path is the last segment with an `s`
/// appended and the resource argument is the last segment plus `Id`.
///
/// ## Examples
///
/// ```
/// use crudgen_gen::paths::derive_paths;
///
/// let top = derive_paths(&["target"], None, None).unwrap();
/// assert_eq!(top.collection_arg, "scopeId");
/// assert_eq!(top.resource_arg, "targetId");
/// assert_eq!(top.collection_path, "targets");
/// assert_eq!(top.resource_path.format_string(), "targets/{}");
///
/// let nested = derive_paths(&["organization", "orgId", "project"], None, None).unwrap();
/// assert_eq!(nested.collection_arg, "orgId");
/// assert_eq!(nested.collection_path, "projects");
/// ```
pub fn derive_paths<S: AsRef<str>>(
    chain: &[S],
    parent_type_name: Option<&str>,
    action: Option<&str>,
) -> Option<DerivedPaths> {
    let last = chain.last()?.as_ref();
    let resource_arg = format!("{}Id", to_lower_camel(last));
    let collection_path = pluralize(last);

    let collection_arg = if chain.len() == 1 {
        let parent = parent_type_name
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_SCOPE);
        format!("{}Id", to_lower_camel(parent))
    } else {
        to_lower_camel(chain[chain.len() - 2].as_ref())
    };

    let resource_path = PathTemplate {
        parts: vec![
            PathPart::Literal(collection_path.clone()),
            PathPart::Arg(resource_arg.clone()),
        ],
        action: action.filter(|a| !a.is_empty()).map(str::to_string),
    };

    Some(DerivedPaths {
        collection_arg,
        resource_arg,
        collection_path,
        resource_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_derives_nothing() {
        let chain: [&str; 0] = [];
        assert!(derive_paths(&chain, None, None).is_none());
    }

    #[test]
    fn single_segment_uses_scope_by_default() {
        let paths = derive_paths(&["scope"], None, None).unwrap();
        assert_eq!(paths.collection_arg, "scopeId");
        assert_eq!(paths.resource_arg, "scopeId");
        assert_eq!(paths.collection_path, "scopes");
        assert_eq!(paths.resource_path.expand(&["o_1"]).unwrap(), "scopes/o_1");
    }

    #[test]
    fn single_segment_uses_parent_type() {
        let paths = derive_paths(&["host"], Some("host-catalog"), None).unwrap();
        assert_eq!(paths.collection_arg, "hostCatalogId");
        assert_eq!(paths.resource_arg, "hostId");
    }

    #[test]
    fn empty_parent_type_falls_back_to_scope() {
        let paths = derive_paths(&["role"], Some(""), None).unwrap();
        assert_eq!(paths.collection_arg, "scopeId");
    }

    #[test]
    fn hyphens_become_word_breaks() {
        let paths = derive_paths(&["auth-method"], None, None).unwrap();
        assert_eq!(paths.resource_arg, "authMethodId");
        assert_eq!(paths.collection_path, "auth-methods");
    }

    #[test]
    fn single_and_nested_chains_pluralize_alike() {
        let top = derive_paths(&["host"], Some("host-catalog"), None).unwrap();
        let nested = derive_paths(&["host-catalog", "hostCatalogId", "host"], None, None).unwrap();
        assert_eq!(top.collection_path, nested.collection_path);
        assert_eq!(top.resource_path, nested.resource_path);
    }

    #[test]
    fn multi_segment_uses_parent_placeholder() {
        let paths = derive_paths(&["host-catalog", "hostCatalogId", "host"], None, None).unwrap();
        assert_eq!(paths.collection_arg, "hostCatalogId");
        assert_eq!(paths.resource_arg, "hostId");
        assert_eq!(paths.collection_path, "hosts");
        assert_eq!(paths.resource_path.format_string(), "hosts/{}");
    }

    #[test]
    fn parent_type_ignored_for_multi_segment() {
        let paths = derive_paths(&["organization", "orgId", "project"], Some("group"), None).unwrap();
        assert_eq!(paths.collection_arg, "orgId");
    }

    #[test]
    fn action_goes_on_resource_path_only() {
        let paths = derive_paths(&["target"], None, Some("add-host-sets")).unwrap();
        assert_eq!(paths.resource_path.format_string(), "targets/{}:add-host-sets");
        assert_eq!(paths.collection_path, "targets");
        assert_eq!(
            paths.collection_path_with_action("search"),
            "targets:search"
        );
    }

    #[test]
    fn resource_path_with_action_replaces_existing_action() {
        let paths = derive_paths(&["group"], None, Some("old")).unwrap();
        let path = paths.resource_path_with_action("set-members");
        assert_eq!(path.format_string(), "groups/{}:set-members");
        assert_eq!(path.action(), Some("set-members"));
    }

    #[test]
    fn to_path_single_segment_is_literal() {
        let path = to_path(&["scopes"], None);
        assert!(path.is_literal());
        assert_eq!(path.format_string(), "scopes");

        let with_action = to_path(&["scopes"], Some("list-resolvable"));
        assert!(with_action.is_literal());
        assert_eq!(with_action.format_string(), "scopes:list-resolvable");
    }

    #[test]
    fn to_path_marks_odd_segments() {
        let path = to_path(&["a", "aId", "b", "bId", "c"], Some("go"));
        assert_eq!(path.substitution_sites(), 2);
        assert_eq!(path.args(), vec!["aId", "bId"]);
        assert_eq!(path.format_string(), "a/{}/b/{}/c:go");
        assert_eq!(path.to_string(), "a/{aId}/b/{bId}/c:go");
    }

    #[test]
    fn expand_rejects_wrong_arity() {
        let path = to_path(&["a", "aId", "b"], None);
        assert!(path.expand(&[]).is_none());
        assert!(path.expand(&["1", "2"]).is_none());
        assert_eq!(path.expand(&["1"]).unwrap(), "a/1/b");
    }

    #[test]
    fn empty_action_is_ignored() {
        assert_eq!(to_path(&["a"], Some("")).format_string(), "a");
    }

    #[test]
    fn literal_constructor_has_no_sites() {
        let path = PathTemplate::literal("scopes");
        assert!(path.is_literal());
        assert_eq!(path.expand(&[]).unwrap(), "scopes");
    }
}
