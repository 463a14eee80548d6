//! Target file locations inside a SENAITE instance home.

use std::path::{Path, PathBuf};

use serde::Serialize;

pub const DEFAULT_INSTANCE_HOME: &str = "/home/senaite/senaitelims";

pub const ZOPE_CONF: &str = "parts/instance/etc/zope.conf";
pub const CUSTOM_CONF: &str = "custom.cfg";
pub const ZEOPACK: &str = "bin/zeopack";
pub const CORS_CONF: &str = "parts/instance/etc/package-includes/999-additional-overrides.zcml";
pub const INSTANCE_VAR: &str = "parts/instance/var";

/// Depending on the buildout the ZEO server lives in `parts/zeo` or `parts/zeoserver`.
pub const ZEO_CONFS: [&str; 2] = ["parts/zeo/etc/zeo.conf", "parts/zeoserver/etc/zeo.conf"];

/// Resolved, absolute-or-home-relative locations of every file the steps touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstancePaths {
    pub instance_home: PathBuf,
    pub zope_conf: PathBuf,
    pub custom_conf: PathBuf,
    pub zeopack: PathBuf,
    pub cors_conf: PathBuf,
    /// Candidate ZEO server configs; only the ones that exist are touched.
    pub zeo_confs: Vec<PathBuf>,
    /// Client var directory written into the `<zeoclient>` block.
    pub instance_var: PathBuf,
}

impl InstancePaths {
    /// Default layout rooted at `home`.
    pub fn under(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            zope_conf: home.join(ZOPE_CONF),
            custom_conf: home.join(CUSTOM_CONF),
            zeopack: home.join(ZEOPACK),
            cors_conf: home.join(CORS_CONF),
            zeo_confs: ZEO_CONFS.iter().map(|rel| home.join(rel)).collect(),
            instance_var: home.join(INSTANCE_VAR),
            instance_home: home,
        }
    }

    /// Resolve `path` against the instance home unless it is already absolute.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.instance_home.join(path) }
    }
}

impl Default for InstancePaths {
    fn default() -> Self {
        Self::under(DEFAULT_INSTANCE_HOME)
    }
}
