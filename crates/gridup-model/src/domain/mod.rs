mod attrs;
pub use attrs::AttrMap;

mod env;
pub use env::EnvMap;

mod descriptor;
pub use descriptor::ServiceDescriptor;

mod node_request;
pub use node_request::NodeRequest;

mod command;
pub use command::CommandDescriptor;

mod constants;
pub use constants::*;

/// Cluster node identifier, as reported by the node allocator.
///
/// Plain hostname; the allocator and the process launcher agree on its
/// meaning, the provisioning core only threads it through.
pub type NodeName = String;
