pub mod error;
pub use error::{LaunchError, ServiceError};

pub mod addr;
pub use addr::{AddressResolver, BindAddr, HostPort};

pub mod ports;
pub use ports::{PortAllocator, UniquePorts};

pub mod workdir;
pub use workdir::WorkDirLayout;

pub mod cluster;
pub use cluster::{NodeAllocator, ProcessLauncher};

pub mod registry;
pub use registry::ServiceRegistry;

pub mod service;
pub use service::{GridService, MapRed, MapRedExternal};
