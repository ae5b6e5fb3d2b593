//! The field registry: which client keys may be used for which capability, and the trusted
//! identifier each of them stands for.

use std::collections::BTreeMap;

use enum_iterator::Sequence;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The capabilities a client key can be registered for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    Search,
    Sorting,
    Projection,
    Condition,
}

impl Capability {
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Search => "search",
            Capability::Sorting => "sorting",
            Capability::Projection => "projection",
            Capability::Condition => "condition",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Mapping from a client key to a trusted identifier (a column or document field name).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct FieldMapping(pub BTreeMap<String, String>);

impl FieldMapping {
    pub fn empty() -> Self {
        FieldMapping(BTreeMap::new())
    }

    /// Look up the trusted identifier for a client key.
    pub fn get(&self, client_key: &str) -> Option<&str> {
        self.0.get(client_key).map(String::as_str)
    }

    pub fn contains_key(&self, client_key: &str) -> bool {
        self.0.contains_key(client_key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for FieldMapping {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FieldMapping(
            iter.into_iter()
                .map(|(key, identifier)| (key.into(), identifier.into()))
                .collect(),
        )
    }
}

/// The five independent mappings a deployment exposes.
///
/// A client key that is absent from the mapping of the capability it is used for is rejected
/// during validation. An empty registry therefore rejects every field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldRegistry {
    #[serde(default)]
    pub search_fields: FieldMapping,
    #[serde(default)]
    pub sorting_fields: FieldMapping,
    #[serde(default)]
    pub projection_fields: FieldMapping,
    #[serde(default)]
    pub condition_fields: FieldMapping,
    /// Client keys whose condition values are parsed as timestamps when possible.
    #[serde(default)]
    pub date_time_field_keys: FieldMapping,
}

impl FieldRegistry {
    pub fn empty() -> Self {
        FieldRegistry::default()
    }

    /// The mapping consulted for a capability.
    pub fn mapping(&self, capability: Capability) -> &FieldMapping {
        match capability {
            Capability::Search => &self.search_fields,
            Capability::Sorting => &self.sorting_fields,
            Capability::Projection => &self.projection_fields,
            Capability::Condition => &self.condition_fields,
        }
    }

    /// Resolve a client key to its trusted identifier for the given capability.
    pub fn resolve(&self, capability: Capability, client_key: &str) -> Option<&str> {
        self.mapping(capability).get(client_key)
    }

    pub fn is_date_time(&self, client_key: &str) -> bool {
        self.date_time_field_keys.contains_key(client_key)
    }
}
