//! senaite-init: configure a SENAITE instance and its ZEO server from environment variables.
//!
//! Runs at container start, before the server process, and rewrites a fixed
//! set of configuration files: the buildout `custom.cfg`, the CORS policy
//! override, `zope.conf`, the `zeopack` helper and the ZEO server `zeo.conf`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::LocalFilesystem;

pub use app::Environment;
pub use app::commands::setup::{SetupOptions, SetupResult, WriteMode};
pub use domain::{AppError, InstancePaths, SetupReport, Step, StepOutcome, Variables};

/// Run every step against the real filesystem with the process environment.
pub fn setup(paths: InstancePaths, options: &SetupOptions) -> Result<SetupResult, AppError> {
    setup_with(Variables::from_process(), paths, options)
}

/// Run every step against the real filesystem with an explicit variable source.
pub fn setup_with(
    variables: Variables,
    paths: InstancePaths,
    options: &SetupOptions,
) -> Result<SetupResult, AppError> {
    app::commands::setup::execute(variables, paths, LocalFilesystem::new(), options)
}
