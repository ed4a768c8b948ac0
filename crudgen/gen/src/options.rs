//! Per-package option aggregation.
//!
//! Options are generated per package, not per resource: every resource in a
//! package contributes its option-enabled fields to one shared set, which is
//! emitted once as the package's option module.

use std::collections::{BTreeMap, HashMap};

use crudgen_define::{FieldInfo, ResourceDefinition};
use tracing::debug;

/// The sorted options of one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    pub package: String,
    /// Sorted by [`FieldInfo::name`].
    pub fields: Vec<FieldInfo>,
}

/// Accumulates options across one generation run.
///
/// Options are keyed by field name within a package. When two resources of
/// one package declare the same name, the resource accumulated last wins,
/// even if the two declarations differ in type or subtype. Collisions are
/// logged at `debug` level.
///
/// ## Examples
///
/// ```
/// use crudgen_define::{FieldInfo, FieldType, ResourceDefinition};
/// use crudgen_gen::options::OptionAggregator;
///
/// let user = ResourceDefinition::new("User", "users", "users/user.rs").with_fields([
///     FieldInfo::new("Name", FieldType::String, "name").with_option(),
///     FieldInfo::new("Description", FieldType::String, "description").with_option(),
/// ]);
///
/// let mut aggregator = OptionAggregator::new();
/// aggregator.accumulate(&user);
/// let sets = aggregator.finalize();
///
/// let names: Vec<_> = sets[0].fields.iter().map(|f| f.name.as_str()).collect();
/// assert_eq!(names, ["Description", "Name"]);
/// ```
#[derive(Debug, Default)]
pub struct OptionAggregator {
    packages: BTreeMap<String, HashMap<String, FieldInfo>>,
}

impl OptionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one resource's options into its package.
    pub fn accumulate(&mut self, resource: &ResourceDefinition) {
        if !resource.output_only {
            let mut own: HashMap<String, FieldInfo> = HashMap::new();
            for field in resource.fields.iter().filter(|f| f.generate_option) {
                let mut field = field.clone();
                field.subtype_name = resource.subtype_name.clone();
                own.insert(field.name.clone(), field);
            }
            let package = self.packages.entry(resource.package.clone()).or_default();
            for (name, field) in own {
                merge(package, &resource.package, name, field);
            }
        }

        if !resource.extra_options.is_empty() {
            let package = self.packages.entry(resource.package.clone()).or_default();
            for field in &resource.extra_options {
                merge(package, &resource.package, field.name.clone(), field.clone());
            }
        }
    }

    /// Number of packages seen so far.
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Produces one [`OptionSet`] per package, packages in ascending order.
    pub fn finalize(self) -> Vec<OptionSet> {
        self.packages
            .into_iter()
            .map(|(package, options)| {
                let mut fields: Vec<FieldInfo> = options.into_values().collect();
                fields.sort_by(|a, b| a.name.cmp(&b.name));
                OptionSet { package, fields }
            })
            .collect()
    }
}

fn merge(
    package: &mut HashMap<String, FieldInfo>,
    package_name: &str,
    name: String,
    field: FieldInfo,
) {
    if let Some(previous) = package.get(&name)
        && previous != &field
    {
        debug!(
            package = package_name,
            option = %name,
            "option redeclared; last declaration wins"
        );
    }
    package.insert(name, field);
}
