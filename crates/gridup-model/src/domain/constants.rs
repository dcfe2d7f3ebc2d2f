//! Configuration keys forming the wire contract with the launched daemons.
//!
//! Key names and placeholder tokens must match what the daemons and the
//! process launcher expect byte for byte.

/// RPC address of the job tracker; workers connect here.
pub const MAPRED_JOB_TRACKER: &str = "mapred.job.tracker";

/// HTTP status address of the job tracker.
pub const MAPRED_JOB_TRACKER_HTTP_BIND: &str = "mapred.job.tracker.http.bindAddress";

/// Report address a task tracker binds for the job tracker to reach it.
pub const MAPRED_TASK_TRACKER_REPORT_BIND: &str = "mapred.task.tracker.report.bindAddress";

/// HTTP status address of a task tracker.
pub const MAPRED_TASK_TRACKER_HTTP_BIND: &str = "mapred.task.tracker.http.bindAddress";

/// Default address of the distributed filesystem master.
pub const FS_DEFAULT_NAME: &str = "fs.default.name";

/// Comma-separated per-disk scratch directories of a role.
pub const MAPRED_LOCAL_DIR: &str = "mapred.local.dir";

/// Shared system directory of the service.
pub const MAPRED_SYSTEM_DIR: &str = "mapred.system.dir";

/// Shared temp directory of the service.
pub const MAPRED_TEMP_DIR: &str = "mapred.temp.dir";

/// Comma-separated filesystem-client buffer directories.
pub const DFS_CLIENT_BUFFER_DIR: &str = "dfs.client.buffer.dir";

/// Sentinel the launcher substitutes with the concrete `host:port` the
/// daemon actually binds.
pub const FILL_IN_HOST_PORT: &str = "fillinhostport";

/// Sentinel the launcher substitutes with a directory it provisions.
pub const FILL_IN_DIR: &str = "fillindir";

/// Root logger configuration passed to every launched daemon.
pub const HADOOP_ROOT_LOGGER: &str = "HADOOP_ROOT_LOGGER";

/// Default root logger value: INFO level into the daily rolling appender.
pub const HADOOP_ROOT_LOGGER_VALUE: &str = "INFO,DRFA";
