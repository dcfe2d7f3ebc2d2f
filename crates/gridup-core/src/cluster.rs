//! Collaborator seams: the node allocator and the process launcher.
//!
//! Both are external systems the orchestrator awaits; the bootstrap core
//! itself never calls them.

use async_trait::async_trait;

use gridup_model::{CommandDescriptor, NodeName, NodeRequest};

use crate::error::LaunchError;

/// Node allocator/scheduler seam.
#[async_trait]
pub trait NodeAllocator: Send + Sync {
    /// Request nodes for a service.
    ///
    /// An empty grant signals allocation failure; the allocator never
    /// partially succeeds silently.
    async fn allocate(&self, request: &NodeRequest) -> Vec<NodeName>;
}

/// Process launcher/supervisor seam.
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// Execute a command descriptor on a granted node.
    ///
    /// Resolves placeholder tokens in the finalized attributes, starts the
    /// process, and returns the `"key=value"` parameters the running
    /// process reported back (its actually-bound addresses).
    async fn launch(
        &self,
        node: &NodeName,
        command: &CommandDescriptor,
    ) -> Result<Vec<String>, LaunchError>;
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use gridup_model::{CommandDescriptor, NodeName, NodeRequest};

    use super::{NodeAllocator, ProcessLauncher};
    use crate::error::LaunchError;

    struct FixedAllocator {
        nodes: Vec<NodeName>,
    }

    #[async_trait]
    impl NodeAllocator for FixedAllocator {
        async fn allocate(&self, request: &NodeRequest) -> Vec<NodeName> {
            self.nodes.iter().take(request.count as usize).cloned().collect()
        }
    }

    struct RecordingLauncher {
        launched: Mutex<Vec<(NodeName, String)>>,
    }

    #[async_trait]
    impl ProcessLauncher for RecordingLauncher {
        async fn launch(
            &self,
            node: &NodeName,
            command: &CommandDescriptor,
        ) -> Result<Vec<String>, LaunchError> {
            self.launched
                .lock()
                .unwrap()
                .push((node.clone(), command.name.clone()));
            Ok(vec![format!("mapred.job.tracker={node}:9001")])
        }
    }

    #[tokio::test]
    async fn allocator_grants_up_to_requested_count() {
        let allocator = FixedAllocator {
            nodes: vec!["node-1".to_string(), "node-2".to_string()],
        };

        let grant = allocator.allocate(&NodeRequest::master()).await;
        assert_eq!(grant, vec!["node-1".to_string()]);

        let grant = allocator.allocate(&NodeRequest::workers(5)).await;
        assert_eq!(grant.len(), 2);
    }

    #[tokio::test]
    async fn launcher_reports_runtime_parameters() {
        let launcher = RecordingLauncher {
            launched: Mutex::new(Vec::new()),
        };
        let cmd = CommandDescriptor {
            name: "jobtracker".to_string(),
            program: "bin/hadoop".to_string(),
            argv: vec!["jobtracker".to_string()],
            envs: Default::default(),
            pkg_dirs: Vec::new(),
            work_dirs: Vec::new(),
            final_attrs: Default::default(),
            attrs: Default::default(),
        };

        let params = launcher.launch(&"node-1".to_string(), &cmd).await.unwrap();
        assert_eq!(params, vec!["mapred.job.tracker=node-1:9001".to_string()]);
        assert_eq!(
            *launcher.launched.lock().unwrap(),
            vec![("node-1".to_string(), "jobtracker".to_string())]
        );
    }
}
