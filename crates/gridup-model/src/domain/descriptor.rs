use serde::{Deserialize, Serialize};

use crate::{AttrMap, EnvMap};

/// Immutable-per-run configuration bundle for one grid service.
///
/// Produced by config loading before a cluster session starts. The raw
/// attributes are the user-supplied configuration; the finalized attributes
/// are the resolved map the daemons are launched with, and the one surface
/// the provisioning core writes derived keys and placeholders into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    /// Raw user-supplied attributes.
    #[serde(default, skip_serializing_if = "AttrMap::is_empty")]
    pub attrs: AttrMap,
    /// Resolved attributes used at launch time.
    #[serde(default, skip_serializing_if = "AttrMap::is_empty")]
    pub final_attrs: AttrMap,
    /// Environment variables for the launched daemons.
    #[serde(default, skip_serializing_if = "EnvMap::is_empty")]
    pub envs: EnvMap,
    /// Package directories shipped to every launched process.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pkg_dirs: Vec<String>,
}

impl ServiceDescriptor {
    pub fn new(attrs: AttrMap, final_attrs: AttrMap, envs: EnvMap, pkg_dirs: Vec<String>) -> Self {
        Self {
            attrs,
            final_attrs,
            envs,
            pkg_dirs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_loads_from_camel_case_json() {
        let json = r#"{
            "attrs": {"mapred.tasktracker.tasks.maximum": "2"},
            "finalAttrs": {"mapred.job.tracker": "host1:9001"},
            "envs": {"HADOOP_ROOT_LOGGER": ["INFO,DRFA"]},
            "pkgDirs": ["/opt/hadoop"]
        }"#;

        let sd: ServiceDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(sd.attrs.get("mapred.tasktracker.tasks.maximum"), Some("2"));
        assert_eq!(sd.final_attrs.get("mapred.job.tracker"), Some("host1:9001"));
        assert_eq!(
            sd.envs.get("HADOOP_ROOT_LOGGER"),
            Some(&["INFO,DRFA".to_string()][..])
        );
        assert_eq!(sd.pkg_dirs, vec!["/opt/hadoop".to_string()]);
    }

    #[test]
    fn descriptor_empty_sections_are_omitted() {
        let sd = ServiceDescriptor::default();
        let json = serde_json::to_string(&sd).unwrap();
        assert_eq!(json, "{}");
    }
}
