//! Container configuration driven by environment variables.
//!
//! `Environment::setup` runs every step in `Step::ALL` order. Each step is
//! independent: it decides from the variables and the files on disk whether
//! to act, and the first I/O error aborts the run with earlier writes kept.

use std::path::{Path, PathBuf};

use minijinja::context;
use tracing::{debug, info};

use crate::adapters::{InstanceTemplate, InstanceTemplates};
use crate::domain::rewrite::{
    self, BuildoutSettings, CorsPolicy, DEFAULT_ZEO_BIND, ZeoAddress, ZeoClientSettings,
};
use crate::domain::variables::names;
use crate::domain::{AppError, InstancePaths, SetupReport, Step, StepOutcome, StepReport, Variables};
use crate::ports::ConfigFilesystem;

const LIST_SEPARATOR: &str = "\n\t";

pub struct Environment<F: ConfigFilesystem> {
    variables: Variables,
    paths: InstancePaths,
    filesystem: F,
    templates: InstanceTemplates,
}

impl<F: ConfigFilesystem> Environment<F> {
    pub fn new(variables: Variables, paths: InstancePaths, filesystem: F) -> Result<Self, AppError> {
        Ok(Self { variables, paths, filesystem, templates: InstanceTemplates::load()? })
    }

    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    pub fn into_filesystem(self) -> F {
        self.filesystem
    }

    /// Run all steps in order.
    pub fn setup(&self) -> Result<SetupReport, AppError> {
        self.setup_except(&[])
    }

    /// Run all steps in order, reporting the ones in `skip` as disabled.
    pub fn setup_except(&self, skip: &[Step]) -> Result<SetupReport, AppError> {
        let mut report = SetupReport::default();
        for step in Step::ALL {
            let outcome = if skip.contains(&step) {
                StepOutcome::skipped("disabled on the command line")
            } else {
                self.run_step(step)?
            };
            match &outcome {
                StepOutcome::Skipped { reason } => debug!(%step, %reason, "step skipped"),
                StepOutcome::Unchanged => debug!(%step, "step left files unchanged"),
                StepOutcome::Written { paths } => {
                    info!(%step, files = paths.len(), "step applied")
                }
            }
            report.steps.push(StepReport { step, outcome });
        }
        Ok(report)
    }

    pub fn run_step(&self, step: Step) -> Result<StepOutcome, AppError> {
        match step {
            Step::Buildout => self.buildout(),
            Step::Cors => self.cors(),
            Step::Zeoclient => self.zeoclient(),
            Step::Zeopack => self.zeopack(),
            Step::Zeoserver => self.zeoserver(),
            Step::ZeoBindPort => self.set_zeo_bind_port(),
            Step::HttpPort => self.set_http_port(),
        }
    }

    /// Generate `custom.cfg` unless it already exists.
    pub fn buildout(&self) -> Result<StepOutcome, AppError> {
        let target = &self.paths.custom_conf;
        if self.filesystem.file_exists(target) {
            return Ok(StepOutcome::skipped(format!("{} already exists", target.display())));
        }
        let Some(settings) = BuildoutSettings::from_variables(&self.variables) else {
            return Ok(StepOutcome::skipped("no add-ons, zcml, develop packages, site or password"));
        };

        let mut manifest = self.templates.render(
            InstanceTemplate::Buildout,
            context! {
                password => settings.password(),
                find_links => settings.find_links.join(LIST_SEPARATOR),
                develop => settings.develop.join(LIST_SEPARATOR),
                eggs => settings.eggs.join(LIST_SEPARATOR),
                zcml => settings.zcml.join(LIST_SEPARATOR),
                versions => settings.versions.join("\n"),
                sources => settings.sources.join("\n"),
            },
        )?;

        if let Some(site) = &settings.site {
            manifest.push_str(&self.templates.render(
                InstanceTemplate::PloneSite,
                context! { site => site, profiles => settings.profiles.join(LIST_SEPARATOR) },
            )?);
        }

        if let Some(server) = self.variables.non_empty(names::ZEO_ADDRESS) {
            manifest.push_str(
                &self
                    .templates
                    .render(InstanceTemplate::ZeoInstance, context! { zeo_address => server })?,
            );
        }

        self.write(target, &manifest)
    }

    /// Write the CORS policy override when any `CORS_` variable is set.
    pub fn cors(&self) -> Result<StepOutcome, AppError> {
        let Some(policy) = CorsPolicy::from_variables(&self.variables) else {
            return Ok(StepOutcome::skipped("no CORS_ variables"));
        };
        let content = self.templates.render(InstanceTemplate::CorsPolicy, &policy)?;
        self.write(&self.paths.cors_conf, &content)
    }

    /// Swap the `<blobstorage>` block of zope.conf for a `<zeoclient>` block.
    pub fn zeoclient(&self) -> Result<StepOutcome, AppError> {
        let Some(server) = self.variables.non_empty(names::ZEO_ADDRESS) else {
            return Ok(StepOutcome::skipped("ZEO_ADDRESS not set"));
        };

        let target = &self.paths.zope_conf;
        let config = self.filesystem.read_file(target)?;
        if !config.contains(rewrite::zeo_client::BLOBSTORAGE_MARKER) {
            return Ok(StepOutcome::skipped("zope.conf already uses a ZEO client"));
        }

        let settings = ZeoClientSettings::from_variables(server, &self.variables);
        let block = self.templates.render(
            InstanceTemplate::ZeoClient,
            context! {
                server => settings.server,
                read_only => settings.read_only,
                read_only_fallback => settings.read_only_fallback,
                shared_blob_dir => settings.shared_blob_dir,
                storage => settings.storage,
                cache_size => settings.cache_size,
                instance_var => self.paths.instance_var.display().to_string(),
            },
        )?;

        self.write(target, &rewrite::replace_blobstorage(&config, block.trim()))
    }

    /// Point the zeopack helper script at `ZEO_ADDRESS`.
    pub fn zeopack(&self) -> Result<StepOutcome, AppError> {
        let Some(server) = self.variables.non_empty(names::ZEO_ADDRESS) else {
            return Ok(StepOutcome::skipped("ZEO_ADDRESS not set"));
        };
        let address = ZeoAddress::parse(server);

        let target = &self.paths.zeopack;
        if !self.filesystem.file_exists(target) {
            return Ok(StepOutcome::skipped(format!("{} not found", target.display())));
        }

        let script = self.filesystem.read_file(target)?;
        self.write(target, &rewrite::point_zeopack(&script, &address))
    }

    /// Disable `pack-keep-old` in every existing ZEO server config.
    pub fn zeoserver(&self) -> Result<StepOutcome, AppError> {
        let keep_old = self.variables.get_or(names::ZEO_PACK_KEEP_OLD, "");
        if !rewrite::is_falsy(keep_old) {
            return Ok(StepOutcome::skipped("ZEO_PACK_KEEP_OLD not false"));
        }

        let mut written = Vec::new();
        for conf in self.existing_zeo_confs() {
            let text = self.filesystem.read_file(conf)?;
            match rewrite::disable_pack_keep_old(&text) {
                Some(updated) => {
                    self.filesystem.write_file(conf, &updated)?;
                    info!(path = %conf.display(), "disabled pack-keep-old");
                    written.push(conf.to_path_buf());
                }
                None => debug!(path = %conf.display(), "pack-keep-old already configured"),
            }
        }
        Ok(StepOutcome::written(written))
    }

    /// Rewrite the ZEO server `address` lines to `ZEO_BIND:ZEO_PORT`.
    pub fn set_zeo_bind_port(&self) -> Result<StepOutcome, AppError> {
        let Some(port) = self.variables.trimmed(names::ZEO_PORT) else {
            return Ok(StepOutcome::skipped("ZEO_PORT not set"));
        };
        let bind = self.variables.trimmed(names::ZEO_BIND).unwrap_or(DEFAULT_ZEO_BIND);

        let mut written = Vec::new();
        for conf in self.existing_zeo_confs() {
            let text = self.filesystem.read_file(conf)?;
            let updated = rewrite::rewrite_zeo_bind(&text, bind, port);
            if updated != text {
                self.filesystem.write_file(conf, &updated)?;
                info!(path = %conf.display(), %bind, %port, "rewrote ZEO bind address");
                written.push(conf.to_path_buf());
            }
        }
        Ok(StepOutcome::written(written))
    }

    /// Rewrite the instance HTTP listener port in zope.conf.
    pub fn set_http_port(&self) -> Result<StepOutcome, AppError> {
        let Some(port) = self.variables.trimmed(names::HTTP_PORT) else {
            return Ok(StepOutcome::skipped("HTTP_PORT not set"));
        };

        let target = &self.paths.zope_conf;
        if !self.filesystem.file_exists(target) {
            return Ok(StepOutcome::skipped(format!("{} not found", target.display())));
        }

        let text = self.filesystem.read_file(target)?;
        let updated = rewrite::rewrite_http_port(&text, port);
        if updated == text {
            return Ok(StepOutcome::Unchanged);
        }
        self.write(target, &updated)
    }

    fn existing_zeo_confs(&self) -> impl Iterator<Item = &Path> {
        self.paths
            .zeo_confs
            .iter()
            .map(PathBuf::as_path)
            .filter(|conf| self.filesystem.file_exists(conf))
    }

    fn write(&self, path: &Path, content: &str) -> Result<StepOutcome, AppError> {
        self.filesystem.write_file(path, content)?;
        info!(path = %path.display(), "wrote file");
        Ok(StepOutcome::written(vec![path.to_path_buf()]))
    }
}
