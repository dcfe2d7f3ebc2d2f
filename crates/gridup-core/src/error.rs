use thiserror::Error;

/// Errors surfaced by the bootstrap contract.
///
/// Every precondition violation is fatal to the call that hit it; the core
/// never retries and never falls back, since proceeding would launch
/// workers with missing or wrong master addresses.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("missing required attribute: {0}")]
    MissingAttr(String),
    #[error("missing runtime parameter: {0}")]
    MissingParam(String),
    #[error("malformed runtime parameter: {0}")]
    MalformedParam(String),
    #[error("can't parse address from attr {key}: {value}")]
    MalformedAddr { key: String, value: String },
    #[error("can't get job tracker address")]
    MasterAddrUnavailable,
    #[error("dependency address unavailable: {0}")]
    DependencyUnavailable(String),
    #[error("empty node grant")]
    EmptyNodeGrant,
    #[error("no parent work directories configured")]
    NoWorkDirs,
    #[error("operation not supported for an externally managed service")]
    Unsupported,
}

/// Errors from the process launcher collaborator.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("launch failed on {node}: {reason}")]
    Failed { node: String, reason: String },
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for LaunchError {
    fn from(e: std::io::Error) -> Self {
        LaunchError::Io(e.to_string())
    }
}
