//! Per-call option state.
//!
//! Generated option modules expose `with_*`/`default_*` functions that return
//! a [`CallOption`]. Each generated call folds its options, in argument order,
//! into a fresh [`Options`] via [`get_opts`], so for a given key the last
//! option wins.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

/// Key of the nested object that holds subtype-specific attributes.
pub const ATTRIBUTES_KEY: &str = "attributes";

/// Accumulated state of all options passed to one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    post_map: Map<String, Value>,
    query_map: BTreeMap<String, String>,
    automatic_versioning: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a top-level body key.
    pub fn set_post(&mut self, key: &str, value: impl Into<Value>) {
        self.post_map.insert(key.to_string(), value.into());
    }

    /// Sends an explicit `null` for a body key, resetting it server-side.
    pub fn clear_post(&mut self, key: &str) {
        self.post_map.insert(key.to_string(), Value::Null);
    }

    /// Sets a key inside the nested `attributes` object, creating it on demand.
    pub fn set_attribute(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        self.update_attributes(|attrs| {
            attrs.insert(key.to_string(), value);
        });
    }

    /// Sends an explicit `null` for an attribute key.
    pub fn clear_attribute(&mut self, key: &str) {
        self.update_attributes(|attrs| {
            attrs.insert(key.to_string(), Value::Null);
        });
    }

    /// Sets a query-string parameter.
    pub fn set_query(&mut self, key: &str, value: impl ToString) {
        self.query_map.insert(key.to_string(), value.to_string());
    }

    /// Removes a query-string parameter.
    pub fn clear_query(&mut self, key: &str) {
        self.query_map.remove(key);
    }

    /// Sends `values` under `key` only when the list is non-empty.
    ///
    /// Used by Add and Remove mutations.
    pub fn set_list(&mut self, key: &str, values: Vec<String>) {
        if !values.is_empty() {
            self.set_post(key, values);
        }
    }

    /// Replacement semantics for Set mutations.
    ///
    /// - `None`: the key is left unspecified
    /// - `Some(vec![])`: the key is sent as `null`, clearing the collection
    /// - `Some(values)`: the list is sent
    pub fn replace_list(&mut self, key: &str, values: Option<Vec<String>>) {
        match values {
            None => {}
            Some(values) if values.is_empty() => self.clear_post(key),
            Some(values) => self.set_post(key, values),
        }
    }

    pub fn set_automatic_versioning(&mut self, enable: bool) {
        self.automatic_versioning = enable;
    }

    /// Whether a zero version should be resolved with a Read.
    pub fn automatic_versioning(&self) -> bool {
        self.automatic_versioning
    }

    pub fn post_map(&self) -> &Map<String, Value> {
        &self.post_map
    }

    pub fn query_map(&self) -> &BTreeMap<String, String> {
        &self.query_map
    }

    fn update_attributes(&mut self, update: impl FnOnce(&mut Map<String, Value>)) {
        let mut attributes = match self.post_map.remove(ATTRIBUTES_KEY) {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        update(&mut attributes);
        self.post_map
            .insert(ATTRIBUTES_KEY.to_string(), Value::Object(attributes));
    }
}

/// One option passed to a generated call.
///
/// Options are reusable: the same value may be passed to many calls.
#[derive(Clone)]
pub struct CallOption(Arc<dyn Fn(&mut Options) + Send + Sync>);

impl CallOption {
    pub fn new(apply: impl Fn(&mut Options) + Send + Sync + 'static) -> Self {
        Self(Arc::new(apply))
    }

    /// Applies this option to `opts`.
    pub fn apply(&self, opts: &mut Options) {
        (self.0)(opts)
    }

    /// When set and the version passed to an Update or slice mutation is
    /// zero, the current version is fetched with a Read first.
    ///
    /// This opens a window for order-of-modification races between the Read
    /// and the write; use it knowingly.
    pub fn automatic_versioning(enable: bool) -> Self {
        Self::new(move |o| o.set_automatic_versioning(enable))
    }
}

impl fmt::Debug for CallOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CallOption(..)")
    }
}

/// Folds `opt` into a fresh [`Options`], in order.
pub fn get_opts(opt: &[CallOption]) -> Options {
    let mut opts = Options::new();
    for o in opt {
        o.apply(&mut opts);
    }
    opts
}
