use serde::{Deserialize, Serialize};

use crate::{AttrMap, EnvMap};

/// Launch description handed to the process launcher.
///
/// Built once per role and immutable afterwards. Carries both the raw and
/// the finalized attribute maps so the launcher can perform the final
/// placeholder substitution before starting the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDescriptor {
    /// Role name of the process (e.g. `"jobtracker"`).
    pub name: String,
    /// Program to execute, relative to the package directory.
    pub program: String,
    /// Command-line arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub argv: Vec<String>,
    /// Environment variables for the process.
    #[serde(default, skip_serializing_if = "EnvMap::is_empty")]
    pub envs: EnvMap,
    /// Package directories shipped to the node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pkg_dirs: Vec<String>,
    /// Directories the launcher must create before starting the process.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub work_dirs: Vec<String>,
    /// Resolved attributes, including placeholder tokens to substitute.
    #[serde(default, skip_serializing_if = "AttrMap::is_empty")]
    pub final_attrs: AttrMap,
    /// Raw user-supplied attributes.
    #[serde(default, skip_serializing_if = "AttrMap::is_empty")]
    pub attrs: AttrMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_serde_roundtrip() {
        let cmd = CommandDescriptor {
            name: "jobtracker".to_string(),
            program: "bin/hadoop".to_string(),
            argv: vec!["jobtracker".to_string()],
            envs: EnvMap::new(),
            pkg_dirs: vec!["/opt/hadoop".to_string()],
            work_dirs: vec!["/grid/0".to_string()],
            final_attrs: [("mapred.job.tracker", "fillinhostport")]
                .into_iter()
                .collect(),
            attrs: AttrMap::new(),
        };

        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains(r#""name":"jobtracker""#));
        assert!(json.contains(r#""pkgDirs":["/opt/hadoop"]"#));
        assert!(json.contains(r#""finalAttrs""#));

        let back: CommandDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
