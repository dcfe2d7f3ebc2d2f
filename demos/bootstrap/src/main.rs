//! Full bootstrap walkthrough against in-process fake collaborators.
//!
//! Drives the contract in the order a real orchestrator would:
//! launchable check, master node request and grant, master launch,
//! runtime-parameter absorption, then worker launches.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU32, Ordering},
};

use async_trait::async_trait;
use tracing::info;

use gridup_core::{
    AddressResolver, GridService, LaunchError, MapRed, NodeAllocator, ProcessLauncher,
    ServiceError, ServiceRegistry, UniquePorts,
};
use gridup_model::{
    AttrMap, CommandDescriptor, EnvMap, MAPRED_JOB_TRACKER, MAPRED_JOB_TRACKER_HTTP_BIND,
    NodeName, NodeRequest, ServiceDescriptor,
};
use gridup_observe::{LoggerConfig, logger_init};

/// Allocator handing out numbered nodes from an imaginary rack.
struct CountingAllocator {
    next: AtomicU32,
}

#[async_trait]
impl NodeAllocator for CountingAllocator {
    async fn allocate(&self, request: &NodeRequest) -> Vec<NodeName> {
        (0..request.count)
            .map(|_| format!("node-{}", self.next.fetch_add(1, Ordering::Relaxed)))
            .collect()
    }
}

/// Launcher that pretends every daemon binds the address it was asked to,
/// substituting placeholders with ports from a fixed scheme.
struct FakeLauncher {
    launched: Mutex<Vec<(NodeName, String)>>,
}

#[async_trait]
impl ProcessLauncher for FakeLauncher {
    async fn launch(
        &self,
        node: &NodeName,
        command: &CommandDescriptor,
    ) -> Result<Vec<String>, LaunchError> {
        self.launched
            .lock()
            .unwrap()
            .push((node.clone(), command.name.clone()));
        info!(node = %node, command = %command.name, "launched");

        Ok(vec![
            format!("{MAPRED_JOB_TRACKER}={node}:9001"),
            format!("{MAPRED_JOB_TRACKER_HTTP_BIND}={node}:9100"),
        ])
    }
}

/// Filesystem master that already runs outside this session.
struct ExternalDfs {
    addr: String,
}

impl GridService for ExternalDfs {
    fn is_launchable(&self, _services: &ServiceRegistry) -> bool {
        true
    }
    fn is_master_initialized(&self) -> bool {
        true
    }
    fn master_request(&self) -> Option<NodeRequest> {
        None
    }
    fn set_master_nodes(&self, _nodes: &[NodeName]) -> Result<(), ServiceError> {
        Err(ServiceError::Unsupported)
    }
    fn master_commands(
        &self,
        _services: &ServiceRegistry,
    ) -> Result<Vec<CommandDescriptor>, ServiceError> {
        Ok(Vec::new())
    }
    fn worker_commands(
        &self,
        _services: &ServiceRegistry,
    ) -> Result<Vec<CommandDescriptor>, ServiceError> {
        Ok(Vec::new())
    }
    fn set_master_params(&self, _params: &[String]) -> Result<(), ServiceError> {
        Err(ServiceError::Unsupported)
    }
    fn master_addrs(&self) -> Vec<String> {
        vec![self.addr.clone()]
    }
    fn info_addrs(&self) -> Vec<String> {
        Vec::new()
    }
    fn workers(&self) -> Vec<NodeName> {
        Vec::new()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Logger
    logger_init(&LoggerConfig::default())?;
    info!("logger initialized");

    // 2) Service wiring: descriptor, resolver, registry
    let descriptor = ServiceDescriptor::new(
        AttrMap::new(),
        AttrMap::new(),
        EnvMap::new(),
        vec!["/opt/hadoop".to_string()],
    );
    let resolver = AddressResolver::new(Arc::new(UniquePorts::new()));
    let mapred = Arc::new(MapRed::new(
        descriptor,
        vec!["/grid/0".to_string(), "/grid/1".to_string()],
        None,
        resolver,
    ));

    let mut registry = ServiceRegistry::new();
    registry.register(
        "hdfs",
        Arc::new(ExternalDfs {
            addr: "dfs-master:8020".to_string(),
        }),
    );
    registry.register("mapred", Arc::clone(&mapred) as Arc<dyn GridService>);

    let allocator = CountingAllocator {
        next: AtomicU32::new(1),
    };
    let launcher = FakeLauncher {
        launched: Mutex::new(Vec::new()),
    };

    // 3) Dependency gate
    anyhow::ensure!(mapred.is_launchable(&registry), "dependencies not ready");
    info!("service is launchable");

    // 4) Master node request and grant
    let request = mapred.master_request().expect("launched service");
    let grant = allocator.allocate(&request).await;
    mapred.set_master_nodes(&grant)?;
    info!(node = %grant[0], "master node granted");

    // 5) Master launch and runtime-parameter absorption
    let master_cmds = mapred.master_commands(&registry)?;
    let params = launcher.launch(&grant[0], &master_cmds[0]).await?;
    mapred.set_master_params(&params)?;
    info!(
        master = %mapred.master_addrs()[0],
        info = %mapred.info_addrs()[0],
        "master is up"
    );

    // 6) Workers, now that the master address is known
    let worker_nodes = allocator.allocate(&NodeRequest::workers(3)).await;
    let worker_cmds = mapred.worker_commands(&registry)?;
    for node in &worker_nodes {
        launcher.launch(node, &worker_cmds[0]).await?;
    }
    info!(count = worker_nodes.len(), "workers launched");

    let launched = launcher.launched.lock().unwrap();
    info!(total = launched.len(), "bootstrap complete");
    Ok(())
}
