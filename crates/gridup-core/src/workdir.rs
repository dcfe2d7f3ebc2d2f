use gridup_model::{
    AttrMap, DFS_CLIENT_BUFFER_DIR, EnvMap, HADOOP_ROOT_LOGGER, HADOOP_ROOT_LOGGER_VALUE,
    MAPRED_LOCAL_DIR, MAPRED_SYSTEM_DIR, MAPRED_TEMP_DIR,
};

use crate::error::ServiceError;

const LOCAL_DIR: &str = "mapred-local";
const SYSTEM_DIR: &str = "mapred-system";
const TEMP_DIR: &str = "mapred-temp";
const CLIENT_BUFFER_DIR: &str = "dfs-client";

/// Role-specific directory layout derived from the parent work directories.
///
/// Deterministic and order-preserving: identical inputs always produce the
/// identical layout. The system and temp directories are shared per service
/// and derive from the first parent only; local and client-buffer
/// directories exist once per parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkDirLayout {
    /// Flat list the launcher must create: per parent `p`, the entries
    /// `p`, `p/<sub_dir>` and the client-buffer directory.
    pub work_dirs: Vec<String>,
    /// Per-parent scratch directories.
    pub local_dirs: Vec<String>,
    /// Per-parent filesystem-client buffer directories.
    pub client_buffer_dirs: Vec<String>,
    /// Shared system directory, under the first parent.
    pub system_dir: String,
    /// Shared temp directory, under the first parent.
    pub temp_dir: String,
}

impl WorkDirLayout {
    /// Compute the layout for a role tag under each parent directory.
    ///
    /// Distinct role tags (`mapred-jt` vs `mapred-tt`) keep co-located
    /// master and worker processes from colliding on paths.
    pub fn compute(parent_dirs: &[String], sub_dir: &str) -> Result<Self, ServiceError> {
        let first = parent_dirs.first().ok_or(ServiceError::NoWorkDirs)?;

        let mut work_dirs = Vec::with_capacity(parent_dirs.len() * 3);
        let mut local_dirs = Vec::with_capacity(parent_dirs.len());
        let mut client_buffer_dirs = Vec::with_capacity(parent_dirs.len());

        for parent in parent_dirs {
            work_dirs.push(parent.clone());
            work_dirs.push(format!("{parent}/{sub_dir}"));

            local_dirs.push(format!("{parent}/{sub_dir}/{LOCAL_DIR}"));

            let client = format!("{parent}/{sub_dir}/{CLIENT_BUFFER_DIR}");
            client_buffer_dirs.push(client.clone());
            work_dirs.push(client);
        }

        Ok(Self {
            work_dirs,
            local_dirs,
            client_buffer_dirs,
            system_dir: format!("{first}/{sub_dir}/{SYSTEM_DIR}"),
            temp_dir: format!("{first}/{sub_dir}/{TEMP_DIR}"),
        })
    }

    /// Write the layout into the finalized attributes and the daemon env.
    pub fn apply(&self, attrs: &mut AttrMap, envs: &mut EnvMap) {
        attrs.set(MAPRED_LOCAL_DIR, self.local_dirs.join(","));
        attrs.set(MAPRED_SYSTEM_DIR, self.system_dir.clone());
        attrs.set(MAPRED_TEMP_DIR, self.temp_dir.clone());
        attrs.set(DFS_CLIENT_BUFFER_DIR, self.client_buffer_dirs.join(","));

        envs.set(
            HADOOP_ROOT_LOGGER,
            vec![HADOOP_ROOT_LOGGER_VALUE.to_string()],
        );
    }
}
