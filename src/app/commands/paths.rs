//! `paths` command: show where each step reads and writes.

use std::path::PathBuf;

use crate::domain::InstancePaths;
use crate::ports::ConfigFilesystem;

/// One labelled target path and whether it currently exists.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PathEntry {
    pub label: &'static str,
    pub path: PathBuf,
    pub exists: bool,
}

pub fn execute(paths: &InstancePaths, filesystem: &impl ConfigFilesystem) -> Vec<PathEntry> {
    let mut entries = vec![
        ("zope_conf", &paths.zope_conf),
        ("custom_conf", &paths.custom_conf),
        ("zeopack", &paths.zeopack),
        ("cors_conf", &paths.cors_conf),
    ];
    entries.extend(paths.zeo_confs.iter().map(|conf| ("zeo_conf", conf)));

    entries
        .into_iter()
        .map(|(label, path)| PathEntry { label, path: path.clone(), exists: filesystem.file_exists(path) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryFilesystem;

    #[test]
    fn lists_every_target_with_existence() {
        let fs = MemoryFilesystem::with_files([("/lims/parts/zeoserver/etc/zeo.conf", "")]);
        let entries = execute(&InstancePaths::under("/lims"), &fs);

        let labels: Vec<&str> = entries.iter().map(|e| e.label).collect();
        assert_eq!(labels, ["zope_conf", "custom_conf", "zeopack", "cors_conf", "zeo_conf", "zeo_conf"]);
        assert!(!entries[4].exists);
        assert!(entries[5].exists);
    }
}
