//! Embedded instance configuration templates rendered with Minijinja.

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::AppError;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/instance");

/// The fixed set of templates shipped in the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceTemplate {
    Buildout,
    PloneSite,
    ZeoInstance,
    ZeoClient,
    CorsPolicy,
}

impl InstanceTemplate {
    pub const ALL: [InstanceTemplate; 5] = [
        InstanceTemplate::Buildout,
        InstanceTemplate::PloneSite,
        InstanceTemplate::ZeoInstance,
        InstanceTemplate::ZeoClient,
        InstanceTemplate::CorsPolicy,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            InstanceTemplate::Buildout => "buildout.cfg.j2",
            InstanceTemplate::PloneSite => "plonesite.cfg.j2",
            InstanceTemplate::ZeoInstance => "zeo-instance.cfg.j2",
            InstanceTemplate::ZeoClient => "zeoclient.conf.j2",
            InstanceTemplate::CorsPolicy => "cors.zcml.j2",
        }
    }
}

/// Template environment holding every embedded template.
pub struct InstanceTemplates {
    env: Environment<'static>,
}

impl InstanceTemplates {
    pub fn load() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // Output is zcml/cfg text, never HTML.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        for template in InstanceTemplate::ALL {
            let name = template.file_name();
            let source = TEMPLATES_DIR
                .get_file(name)
                .and_then(|file| file.contents_utf8())
                .ok_or_else(|| AppError::Template {
                    template: name.to_string(),
                    reason: "missing or not UTF-8 in embedded assets".to_string(),
                })?;
            env.add_template(name, source).map_err(|err| template_error(name, err))?;
        }

        Ok(Self { env })
    }

    pub fn render<S: Serialize>(
        &self,
        template: InstanceTemplate,
        context: S,
    ) -> Result<String, AppError> {
        let name = template.file_name();
        let compiled = self.env.get_template(name).map_err(|err| template_error(name, err))?;
        compiled.render(context).map_err(|err| template_error(name, err))
    }
}

fn template_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Template { template: template_name.to_string(), reason: err.to_string() }
}
