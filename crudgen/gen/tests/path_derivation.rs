//! Path and argument derivation over whole scope chains.

use crudgen_gen::case::to_lower_camel;
use crudgen_gen::paths::{derive_paths, to_path};
use proptest::prelude::*;

#[test]
fn organization_project_chain() {
    let chain = ["organization", "orgId", "project"];
    let paths = derive_paths(&chain, None, None).unwrap();

    assert_eq!(paths.collection_path, "projects");
    assert_eq!(paths.collection_arg, "orgId");
    assert_eq!(paths.resource_arg, "projectId");
    assert_eq!(to_path(&chain, None).substitution_sites(), 1);
}

#[test]
fn scope_chain_names_both_arguments_scope_id() {
    let paths = derive_paths(&["scope"], None, None).unwrap();
    assert_eq!(paths.collection_arg, "scopeId");
    assert_eq!(paths.resource_arg, "scopeId");
}

#[test]
fn single_segment_paths() {
    let paths = derive_paths(&["host-catalog"], None, Some("add-hosts")).unwrap();
    assert_eq!(paths.collection_path, "host-catalogs");
    assert!(to_path(&["host-catalog"], None).is_literal());
    assert_eq!(
        paths.resource_path.expand(&["hc_1234"]).unwrap(),
        "host-catalogs/hc_1234:add-hosts"
    );
}

#[test]
fn deriving_twice_is_identical() {
    let chain = ["auth-method", "authMethodId", "account"];
    assert_eq!(
        derive_paths(&chain, Some("ignored"), Some("set-password")),
        derive_paths(&chain, Some("ignored"), Some("set-password"))
    );
}

/// An odd-length chain of segments made of lowercase words.
fn chain() -> impl Strategy<Value = Vec<String>> {
    (0usize..4).prop_flat_map(|pairs| {
        prop::collection::vec("[a-z]{1,8}(-[a-z]{1,8})?", pairs * 2 + 1)
    })
}

proptest! {
    #[test]
    fn substitution_sites_match_odd_indices(chain in chain()) {
        let path = to_path(&chain, None);
        let expected = if chain.len() == 1 { 0 } else { chain.len() / 2 };
        prop_assert_eq!(path.substitution_sites(), expected);

        let args: Vec<&str> = chain.iter().skip(1).step_by(2).map(String::as_str).collect();
        if chain.len() > 1 {
            prop_assert_eq!(path.args(), args);
        }
    }

    #[test]
    fn collection_arg_is_camel_of_parent_placeholder(chain in chain()) {
        prop_assume!(chain.len() > 1);
        let paths = derive_paths(&chain, None, None).unwrap();
        prop_assert_eq!(paths.collection_arg, to_lower_camel(&chain[chain.len() - 2]));
        prop_assert_eq!(paths.collection_path, format!("{}s", chain[chain.len() - 1]));
    }

    #[test]
    fn collection_path_is_plural_for_every_chain_length(chain in chain()) {
        let paths = derive_paths(&chain, None, None).unwrap();
        prop_assert_eq!(paths.collection_path, format!("{}s", chain[chain.len() - 1]));
    }

    #[test]
    fn resource_path_has_one_site(chain in chain(), action in "[a-z]{0,6}") {
        let paths = derive_paths(&chain, None, Some(&action)).unwrap();
        prop_assert_eq!(paths.resource_path.substitution_sites(), 1);
        prop_assert_eq!(paths.resource_path.action().is_some(), !action.is_empty());
    }
}
