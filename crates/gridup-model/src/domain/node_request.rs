use serde::{Deserialize, Serialize};

use crate::NodeName;

/// Resource demand handed to the node allocator.
///
/// Created fresh per request; never stored by the provisioning core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRequest {
    /// Number of nodes requested.
    pub count: u32,
    /// Hosts the allocator must not grant.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_hosts: Vec<NodeName>,
    /// Whether the nodes are for worker processes.
    pub worker: bool,
}

impl NodeRequest {
    pub fn new(count: u32, excluded_hosts: Vec<NodeName>, worker: bool) -> Self {
        Self {
            count,
            excluded_hosts,
            worker,
        }
    }

    /// Demand for the single master node of a service.
    pub fn master() -> Self {
        Self::new(1, Vec::new(), false)
    }

    /// Demand for `count` worker nodes.
    pub fn workers(count: u32) -> Self {
        Self::new(count, Vec::new(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::NodeRequest;

    #[test]
    fn master_request_is_one_non_worker_node() {
        let req = NodeRequest::master();
        assert_eq!(req.count, 1);
        assert!(req.excluded_hosts.is_empty());
        assert!(!req.worker);
    }

    #[test]
    fn worker_request_is_flagged() {
        let req = NodeRequest::workers(4);
        assert_eq!(req.count, 4);
        assert!(req.worker);
    }

    #[test]
    fn serde_omits_empty_exclusions() {
        let json = serde_json::to_string(&NodeRequest::master()).unwrap();
        assert_eq!(json, r#"{"count":1,"worker":false}"#);
    }
}
