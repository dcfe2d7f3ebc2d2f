use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Environment passed to a launched daemon.
///
/// Each variable maps to a list of values; the launcher joins them with the
/// platform separator when materializing the process environment. Stored
/// ordered so serialized descriptors are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvMap(BTreeMap<String, Vec<String>>);

impl EnvMap {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the values for a variable.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(|v| v.as_slice())
    }

    /// Set a variable to the given value list, replacing any previous list.
    pub fn set<K>(&mut self, key: K, values: Vec<String>)
    where
        K: Into<String>,
    {
        self.0.insert(key.into(), values);
    }

    /// Append a single value to a variable's list.
    pub fn push<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Iterate over all variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
