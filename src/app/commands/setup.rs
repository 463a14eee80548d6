//! `setup` command: run every configuration step against the instance.

use std::path::PathBuf;

use serde::Serialize;

use crate::adapters::StagedFilesystem;
use crate::app::Environment;
use crate::domain::{AppError, InstancePaths, SetupReport, Step, Variables};
use crate::ports::ConfigFilesystem;

/// How step output reaches the filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Each step writes as it goes; a failure keeps earlier writes.
    #[default]
    Direct,
    /// Stage everything in memory and write nothing.
    DryRun,
    /// Stage everything, then write all files once every step has succeeded.
    AllOrNothing,
}

#[derive(Debug, Clone, Default)]
pub struct SetupOptions {
    pub skip: Vec<Step>,
    pub mode: WriteMode,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetupResult {
    pub mode: WriteMode,
    #[serde(flatten)]
    pub report: SetupReport,
    /// Files that a dry run would have written.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pending: Vec<PathBuf>,
}

pub fn execute<F: ConfigFilesystem>(
    variables: Variables,
    paths: InstancePaths,
    filesystem: F,
    options: &SetupOptions,
) -> Result<SetupResult, AppError> {
    match options.mode {
        WriteMode::Direct => {
            let environment = Environment::new(variables, paths, filesystem)?;
            let report = environment.setup_except(&options.skip)?;
            Ok(SetupResult { mode: options.mode, report, pending: Vec::new() })
        }
        WriteMode::DryRun => {
            let environment = Environment::new(variables, paths, StagedFilesystem::new(filesystem))?;
            let report = environment.setup_except(&options.skip)?;
            let pending = environment.filesystem().staged().into_keys().collect();
            Ok(SetupResult { mode: options.mode, report, pending })
        }
        WriteMode::AllOrNothing => {
            let environment = Environment::new(variables, paths, StagedFilesystem::new(filesystem))?;
            let report = environment.setup_except(&options.skip)?;
            environment.into_filesystem().commit()?;
            Ok(SetupResult { mode: options.mode, report, pending: Vec::new() })
        }
    }
}
