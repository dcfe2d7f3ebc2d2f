use std::fmt;
use std::sync::Arc;

use gridup_model::AttrMap;

use crate::{error::ServiceError, ports::PortAllocator};

/// A `host:port` pair as it appears in configuration values and
/// runtime-reported parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPort {
    pub host: String,
    pub port: u16,
}

impl HostPort {
    /// Split a value on the first colon.
    ///
    /// Returns `None` when there is no colon or the port is not numeric.
    pub fn parse(value: &str) -> Option<Self> {
        let (host, port) = value.split_once(':')?;
        let port = port.parse().ok()?;
        Some(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Outcome of resolving a bind-address attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindAddr {
    /// The attribute carried an explicit `host:port`.
    Configured(HostPort),
    /// The attribute was absent; a fresh port with no host commitment.
    Allocated(u16),
}

impl BindAddr {
    pub fn port(&self) -> u16 {
        match self {
            BindAddr::Configured(hp) => hp.port,
            BindAddr::Allocated(port) => *port,
        }
    }
}

/// Resolves `host:port` attributes, falling back to the unique-port
/// allocator when a key is absent.
///
/// One resolver serves the primary, info/HTTP and report addresses alike;
/// each key resolves independently.
#[derive(Clone)]
pub struct AddressResolver {
    ports: Arc<dyn PortAllocator>,
}

impl AddressResolver {
    pub fn new(ports: Arc<dyn PortAllocator>) -> Self {
        Self { ports }
    }

    /// Resolve `key` from `attrs`.
    ///
    /// A present value must parse as `host:port`; a malformed value fails
    /// with [`ServiceError::MalformedAddr`] naming the key and raw value,
    /// never a default.
    pub fn resolve(&self, attrs: &AttrMap, key: &str) -> Result<BindAddr, ServiceError> {
        match attrs.get(key) {
            None => Ok(BindAddr::Allocated(self.ports.allocate())),
            Some(value) => HostPort::parse(value).map(BindAddr::Configured).ok_or_else(|| {
                ServiceError::MalformedAddr {
                    key: key.to_string(),
                    value: value.to_string(),
                }
            }),
        }
    }
}
