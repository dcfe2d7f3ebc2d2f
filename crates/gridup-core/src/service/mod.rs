mod mapred;
pub use mapred::{MapRed, MapRedExternal};

use gridup_model::{CommandDescriptor, NodeName, NodeRequest};

use crate::{error::ServiceError, registry::ServiceRegistry};

/// Bootstrap contract of a master/worker grid service.
///
/// A service cannot know its own network address until its master process
/// binds a port at runtime, yet workers must be launched with that address
/// baked in. The contract therefore sequences bootstrap in two phases: the
/// orchestrator requests and launches exactly one master with placeholder
/// configuration, absorbs the master's runtime-reported parameters through
/// [`GridService::set_master_params`], and only then asks for worker
/// commands.
///
/// Two implementations exist and are always dispatched through this trait:
/// [`MapRed`] for a master launched and wired by this system, and
/// [`MapRedExternal`] for a master already running outside of it.
///
/// Ordering is a documented precondition, not enforced here:
/// `set_master_nodes` before `master_commands`; the master launch before
/// `set_master_params`; `set_master_params` before `worker_commands`.
pub trait GridService: Send + Sync {
    /// True once every dependency this service declares reports an
    /// initialized master. Pure query; a missing dependency entry reads as
    /// not launchable yet.
    fn is_launchable(&self, services: &ServiceRegistry) -> bool;

    /// True once the master's runtime parameters have been absorbed.
    fn is_master_initialized(&self) -> bool;

    /// Resource demand for the master node, `None` when this service
    /// launches nothing.
    fn master_request(&self) -> Option<NodeRequest>;

    /// Record the allocator's grant for the master request.
    fn set_master_nodes(&self, nodes: &[NodeName]) -> Result<(), ServiceError>;

    /// Launch descriptors for the master process.
    fn master_commands(
        &self,
        services: &ServiceRegistry,
    ) -> Result<Vec<CommandDescriptor>, ServiceError>;

    /// Launch descriptors for administrative side processes.
    fn admin_commands(
        &self,
        services: &ServiceRegistry,
    ) -> Result<Vec<CommandDescriptor>, ServiceError> {
        let _ = services;
        Ok(Vec::new())
    }

    /// Launch descriptors for worker processes.
    fn worker_commands(
        &self,
        services: &ServiceRegistry,
    ) -> Result<Vec<CommandDescriptor>, ServiceError>;

    /// Absorb the `"key=value"` parameters the running master reported.
    fn set_master_params(&self, params: &[String]) -> Result<(), ServiceError>;

    /// Master address(es); empty until resolved.
    fn master_addrs(&self) -> Vec<String>;

    /// Master info/HTTP address(es); empty until resolved.
    fn info_addrs(&self) -> Vec<String>;

    /// Nodes currently running workers of this service.
    fn workers(&self) -> Vec<NodeName>;

    /// Node this service must be placed on, if pinned.
    fn required_node(&self) -> Option<NodeName> {
        None
    }

    /// How many additional workers the service wants.
    fn needs_more(&self) -> u32 {
        0
    }

    /// How many workers the service could give back.
    fn needs_less(&self) -> u32 {
        0
    }
}
