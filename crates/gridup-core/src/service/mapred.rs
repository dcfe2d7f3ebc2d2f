use std::collections::BTreeMap;
use std::sync::RwLock;

use tracing::{debug, instrument, trace};

use gridup_model::{
    AttrMap, CommandDescriptor, FILL_IN_HOST_PORT, FS_DEFAULT_NAME, MAPRED_JOB_TRACKER,
    MAPRED_JOB_TRACKER_HTTP_BIND, MAPRED_TASK_TRACKER_HTTP_BIND, MAPRED_TASK_TRACKER_REPORT_BIND,
    NodeName, NodeRequest, ServiceDescriptor,
};

use crate::{
    addr::{AddressResolver, HostPort},
    error::ServiceError,
    registry::ServiceRegistry,
    service::GridService,
    workdir::WorkDirLayout,
};

/// Registry name of the distributed filesystem this service depends on.
const DFS_SERVICE: &str = "hdfs";

const HADOOP_PROGRAM: &str = "bin/hadoop";
const JOB_TRACKER: &str = "jobtracker";
const TASK_TRACKER: &str = "tasktracker";

/// Role tags for work-directory layout; distinct so co-located master and
/// worker processes never collide on paths.
const JOB_TRACKER_SUB_DIR: &str = "mapred-jt";
const TASK_TRACKER_SUB_DIR: &str = "mapred-tt";

/// MapReduce service launched and wired by this system.
///
/// The bootstrap state machine: placeholder tokens written into the
/// finalized attributes before launch are a contract with the process
/// launcher, which substitutes concrete values and reports the resolution
/// back through [`GridService::set_master_params`].
pub struct MapRed {
    resolver: AddressResolver,
    work_dirs: Vec<String>,
    required_node: Option<NodeName>,
    inner: RwLock<MapRedInner>,
}

struct MapRedInner {
    descriptor: ServiceDescriptor,
    master_node: Option<NodeName>,
    master_addr: Option<String>,
    info_addr: Option<String>,
    workers: Vec<NodeName>,
}

impl MapRed {
    pub fn new(
        descriptor: ServiceDescriptor,
        work_dirs: Vec<String>,
        required_node: Option<NodeName>,
        resolver: AddressResolver,
    ) -> Self {
        Self {
            resolver,
            work_dirs,
            required_node,
            inner: RwLock::new(MapRedInner {
                descriptor,
                master_node: None,
                master_addr: None,
                info_addr: None,
                workers: Vec::new(),
            }),
        }
    }

    /// Node the master was granted or reported from, once known.
    pub fn master_node(&self) -> Option<NodeName> {
        self.inner.read().unwrap().master_node.clone()
    }

    fn dfs_addr(services: &ServiceRegistry) -> Result<String, ServiceError> {
        services
            .get(DFS_SERVICE)
            .and_then(|dfs| dfs.master_addrs().into_iter().next())
            .ok_or_else(|| ServiceError::DependencyUnavailable(DFS_SERVICE.to_string()))
    }

    fn job_tracker_command(&self, dfs_addr: String) -> Result<CommandDescriptor, ServiceError> {
        let layout = WorkDirLayout::compute(&self.work_dirs, JOB_TRACKER_SUB_DIR)?;

        let mut inner = self.inner.write().unwrap();
        let sd = &mut inner.descriptor;

        ensure_bind_addr(&self.resolver, &mut sd.final_attrs, MAPRED_JOB_TRACKER)?;
        ensure_bind_addr(
            &self.resolver,
            &mut sd.final_attrs,
            MAPRED_JOB_TRACKER_HTTP_BIND,
        )?;
        sd.final_attrs.set(FS_DEFAULT_NAME, dfs_addr);

        layout.apply(&mut sd.final_attrs, &mut sd.envs);

        trace!(work_dirs = layout.work_dirs.len(), "job tracker command assembled");
        Ok(role_command(JOB_TRACKER, sd, layout.work_dirs))
    }

    fn task_tracker_command(
        &self,
        dfs_addr: String,
        master_addr: String,
    ) -> Result<CommandDescriptor, ServiceError> {
        let layout = WorkDirLayout::compute(&self.work_dirs, TASK_TRACKER_SUB_DIR)?;

        let mut inner = self.inner.write().unwrap();
        let sd = &mut inner.descriptor;

        sd.final_attrs.set(MAPRED_JOB_TRACKER, master_addr);
        sd.final_attrs.set(FS_DEFAULT_NAME, dfs_addr);
        ensure_bind_addr(
            &self.resolver,
            &mut sd.final_attrs,
            MAPRED_TASK_TRACKER_REPORT_BIND,
        )?;
        ensure_bind_addr(
            &self.resolver,
            &mut sd.final_attrs,
            MAPRED_TASK_TRACKER_HTTP_BIND,
        )?;

        layout.apply(&mut sd.final_attrs, &mut sd.envs);

        trace!(work_dirs = layout.work_dirs.len(), "task tracker command assembled");
        Ok(role_command(TASK_TRACKER, sd, layout.work_dirs))
    }
}

impl GridService for MapRed {
    fn is_launchable(&self, services: &ServiceRegistry) -> bool {
        services
            .get(DFS_SERVICE)
            .is_some_and(|dfs| dfs.is_master_initialized())
    }

    fn is_master_initialized(&self) -> bool {
        self.inner.read().unwrap().master_addr.is_some()
    }

    fn master_request(&self) -> Option<NodeRequest> {
        Some(NodeRequest::master())
    }

    fn set_master_nodes(&self, nodes: &[NodeName]) -> Result<(), ServiceError> {
        let node = nodes.first().ok_or(ServiceError::EmptyNodeGrant)?;
        debug!(node = %node, "master node assigned");
        self.inner.write().unwrap().master_node = Some(node.clone());
        Ok(())
    }

    #[instrument(level = "debug", skip(self, services))]
    fn master_commands(
        &self,
        services: &ServiceRegistry,
    ) -> Result<Vec<CommandDescriptor>, ServiceError> {
        let dfs_addr = Self::dfs_addr(services)?;
        Ok(vec![self.job_tracker_command(dfs_addr)?])
    }

    #[instrument(level = "debug", skip(self, services))]
    fn worker_commands(
        &self,
        services: &ServiceRegistry,
    ) -> Result<Vec<CommandDescriptor>, ServiceError> {
        let master_addr = self
            .inner
            .read()
            .unwrap()
            .master_addr
            .clone()
            .ok_or(ServiceError::MasterAddrUnavailable)?;
        let dfs_addr = Self::dfs_addr(services)?;
        Ok(vec![self.task_tracker_command(dfs_addr, master_addr)?])
    }

    #[instrument(level = "debug", skip(self, params))]
    fn set_master_params(&self, params: &[String]) -> Result<(), ServiceError> {
        let parsed = parse_equals(params)?;

        let master_addr = parsed
            .get(MAPRED_JOB_TRACKER)
            .ok_or_else(|| ServiceError::MissingParam(MAPRED_JOB_TRACKER.to_string()))?;
        let hp = HostPort::parse(master_addr).ok_or_else(|| ServiceError::MalformedAddr {
            key: MAPRED_JOB_TRACKER.to_string(),
            value: master_addr.clone(),
        })?;
        let info_addr = parsed
            .get(MAPRED_JOB_TRACKER_HTTP_BIND)
            .ok_or_else(|| ServiceError::MissingParam(MAPRED_JOB_TRACKER_HTTP_BIND.to_string()))?;

        debug!(master = %master_addr, info = %info_addr, "master parameters absorbed");

        let mut inner = self.inner.write().unwrap();
        inner.master_addr = Some(master_addr.clone());
        inner.master_node = Some(hp.host);
        inner.info_addr = Some(info_addr.clone());
        Ok(())
    }

    fn master_addrs(&self) -> Vec<String> {
        self.inner.read().unwrap().master_addr.clone().into_iter().collect()
    }

    fn info_addrs(&self) -> Vec<String> {
        self.inner.read().unwrap().info_addr.clone().into_iter().collect()
    }

    fn workers(&self) -> Vec<NodeName> {
        self.inner.read().unwrap().workers.clone()
    }

    fn required_node(&self) -> Option<NodeName> {
        self.required_node.clone()
    }
}

/// MapReduce service whose master already runs outside this system.
///
/// Null-object rendition of the same contract: nothing is requested or
/// launched, and the master addresses are read statically from the
/// finalized attributes instead of from runtime discovery.
pub struct MapRedExternal {
    descriptor: ServiceDescriptor,
}

impl MapRedExternal {
    pub fn new(descriptor: ServiceDescriptor) -> Self {
        Self { descriptor }
    }

    fn static_addr(&self, key: &str) -> Vec<String> {
        self.descriptor
            .final_attrs
            .get(key)
            .map(|v| v.to_string())
            .into_iter()
            .collect()
    }
}

impl GridService for MapRedExternal {
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
        self.static_addr(MAPRED_JOB_TRACKER)
    }

    fn info_addrs(&self) -> Vec<String> {
        self.static_addr(MAPRED_JOB_TRACKER_HTTP_BIND)
    }

    fn workers(&self) -> Vec<NodeName> {
        Vec::new()
    }
}

/// Default a bind-address attribute to the placeholder token, validating
/// any explicitly configured value instead of silently keeping it.
fn ensure_bind_addr(
    resolver: &AddressResolver,
    attrs: &mut AttrMap,
    key: &str,
) -> Result<(), ServiceError> {
    let configured = attrs.get(key).is_some_and(|v| v != FILL_IN_HOST_PORT);
    if configured {
        resolver.resolve(attrs, key)?;
    } else {
        attrs.set(key, FILL_IN_HOST_PORT);
    }
    Ok(())
}

fn role_command(role: &str, sd: &ServiceDescriptor, work_dirs: Vec<String>) -> CommandDescriptor {
    CommandDescriptor {
        name: role.to_string(),
        program: HADOOP_PROGRAM.to_string(),
        argv: vec![role.to_string()],
        envs: sd.envs.clone(),
        pkg_dirs: sd.pkg_dirs.clone(),
        work_dirs,
        final_attrs: sd.final_attrs.clone(),
        attrs: sd.attrs.clone(),
    }
}

fn parse_equals(params: &[String]) -> Result<BTreeMap<String, String>, ServiceError> {
    params
        .iter()
        .map(|item| {
            item.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| ServiceError::MalformedParam(item.clone()))
        })
        .collect()
}
