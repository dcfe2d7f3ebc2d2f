use std::{collections::BTreeMap, sync::Arc};

use crate::service::GridService;

/// Name-indexed lookup of the services participating in a cluster session.
///
/// Dependency queries during bootstrap ("is the filesystem master up, what
/// is its address") go through this registry, so services only ever know
/// each other by name.
#[derive(Default, Clone)]
pub struct ServiceRegistry {
    services: BTreeMap<String, Arc<dyn GridService>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self {
            services: BTreeMap::new(),
        }
    }

    /// Register a service under its well-known name.
    ///
    /// Re-registering a name replaces the previous entry.
    pub fn register<N>(&mut self, name: N, service: Arc<dyn GridService>)
    where
        N: Into<String>,
    {
        self.services.insert(name.into(), service);
    }

    /// Look up a service by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn GridService>> {
        self.services.get(name)
    }

    /// Iterate over registered names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(|n| n.as_str())
    }
}
