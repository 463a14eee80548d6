//! Optional TOML configuration for target paths.
//!
//! ```toml
//! instance_home = "/home/senaite/senaitelims"
//!
//! [paths]
//! zope_conf = "parts/instance/etc/zope.conf"
//! zeo_confs = ["parts/zeo/etc/zeo.conf"]
//! ```
//!
//! Relative paths resolve against the instance home. Values given on the
//! command line are merged on top with [`PathsConfig::merge`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::AppError;
use super::paths::InstancePaths;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    #[serde(default)]
    pub instance_home: Option<PathBuf>,
    #[serde(default)]
    pub paths: PathOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathOverrides {
    pub zope_conf: Option<PathBuf>,
    pub custom_conf: Option<PathBuf>,
    pub zeopack: Option<PathBuf>,
    pub cors_conf: Option<PathBuf>,
    pub zeo_confs: Option<Vec<PathBuf>>,
    pub instance_var: Option<PathBuf>,
}

impl PathsConfig {
    /// Overlay `overrides` on top of `self`; any value set in `overrides` wins.
    pub fn merge(self, overrides: PathsConfig) -> PathsConfig {
        let base = self.paths;
        let top = overrides.paths;
        PathsConfig {
            instance_home: overrides.instance_home.or(self.instance_home),
            paths: PathOverrides {
                zope_conf: top.zope_conf.or(base.zope_conf),
                custom_conf: top.custom_conf.or(base.custom_conf),
                zeopack: top.zeopack.or(base.zeopack),
                cors_conf: top.cors_conf.or(base.cors_conf),
                zeo_confs: top.zeo_confs.or(base.zeo_confs),
                instance_var: top.instance_var.or(base.instance_var),
            },
        }
    }

    /// Resolve into concrete paths, falling back to the default layout.
    pub fn into_paths(self) -> InstancePaths {
        let mut resolved = match self.instance_home {
            Some(home) => InstancePaths::under(home),
            None => InstancePaths::default(),
        };
        let overrides = self.paths;

        if let Some(path) = overrides.zope_conf {
            resolved.zope_conf = resolved.resolve(&path);
        }
        if let Some(path) = overrides.custom_conf {
            resolved.custom_conf = resolved.resolve(&path);
        }
        if let Some(path) = overrides.zeopack {
            resolved.zeopack = resolved.resolve(&path);
        }
        if let Some(path) = overrides.cors_conf {
            resolved.cors_conf = resolved.resolve(&path);
        }
        if let Some(paths) = overrides.zeo_confs {
            resolved.zeo_confs = paths.iter().map(|path| resolved.resolve(path)).collect();
        }
        if let Some(path) = overrides.instance_var {
            resolved.instance_var = resolved.resolve(&path);
        }
        resolved
    }
}

/// Parse the content of a paths config file. `origin` is only used in error messages.
pub fn parse_config_content(origin: &Path, content: &str) -> Result<PathsConfig, AppError> {
    toml::from_str(content).map_err(|err| AppError::ConfigParse {
        path: origin.to_path_buf(),
        details: err.message().to_string(),
    })
}
