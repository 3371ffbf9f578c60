//! # Method Index
//!
//! The two-level lookup used for dispatch: interface name, then method identifier
//! (`{name}_v{version}`). It is built once, validated eagerly and never mutated afterwards,
//! so it can be shared between concurrent calls without synchronization.
use super::{HttpMethod, InterfaceDefinition, MethodDefinition, MethodIdentifier, SchemaError};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// The methods of a single interface, keyed by [`MethodIdentifier`].
pub type MethodTable = BTreeMap<MethodIdentifier, MethodDefinition>;

/// Immutable mapping `InterfaceName -> MethodIdentifier -> MethodDefinition`.
#[derive(Debug, Clone, Default)]
pub struct MethodIndex {
    interfaces: BTreeMap<String, MethodTable>,
}

impl MethodIndex {
    /// Builds the index from a list of interfaces.
    ///
    /// Every method must use `GET` or `POST`, and method identifiers must be unique
    /// within their interface. A duplicate is rejected rather than overwritten, an
    /// ambiguous schema must not silently resolve to one of its variants.
    pub fn build(interfaces: &[InterfaceDefinition]) -> Result<Self, SchemaError> {
        let mut index = BTreeMap::new();

        for interface in interfaces {
            let table = match index.entry(interface.name.clone()) {
                Entry::Vacant(entry) => entry.insert(MethodTable::new()),
                Entry::Occupied(_) => {
                    return Err(SchemaError::DuplicateInterface(interface.name.clone()));
                }
            };

            for method in &interface.methods {
                if method.http_method.parse::<HttpMethod>().is_err() {
                    return Err(SchemaError::UnsupportedHttpMethod {
                        interface: interface.name.clone(),
                        method: method.name.clone(),
                        http_method: method.http_method.clone(),
                    });
                }

                match table.entry(method.identifier()) {
                    Entry::Vacant(entry) => {
                        entry.insert(method.clone());
                    }
                    Entry::Occupied(entry) => {
                        return Err(SchemaError::DuplicateMethod {
                            interface: interface.name.clone(),
                            method: entry.key().to_string(),
                        });
                    }
                }
            }
        }

        let index = Self { interfaces: index };
        tracing::debug!(
            interfaces = index.interfaces.len(),
            methods = index.len(),
            "method index built"
        );
        Ok(index)
    }

    /// Returns the methods of an interface, if it exists.
    pub fn interface(&self, name: &str) -> Option<&MethodTable> {
        self.interfaces.get(name)
    }

    /// Resolves an `(interface, method identifier)` pair.
    pub fn get(&self, interface: &str, method: &str) -> Option<&MethodDefinition> {
        self.interfaces.get(interface)?.get(method)
    }

    /// Iterates interface names in lexicographic order.
    pub fn interface_names(&self) -> impl Iterator<Item = &str> {
        self.interfaces.keys().map(String::as_str)
    }

    /// Iterates interfaces and their method tables in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MethodTable)> {
        self.interfaces.iter().map(|(name, table)| (name.as_str(), table))
    }

    /// Interfaces whose name contains `query`, ignoring case. An empty query matches all.
    pub fn filter_interfaces<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = (&'a str, &'a MethodTable)> + use<'a> {
        let query = query.to_lowercase();
        self.iter()
            .filter(move |(name, _)| name.to_lowercase().contains(&query))
    }

    /// Total number of indexed methods across all interfaces.
    pub fn len(&self) -> usize {
        self.interfaces.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn interface_count(&self) -> usize {
        self.interfaces.len()
    }
}
