use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use super::error::AppError;

/// One configuration step. `Step::ALL` is the order `setup` runs them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    Buildout,
    Cors,
    Zeoclient,
    Zeopack,
    Zeoserver,
    ZeoBindPort,
    HttpPort,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::Buildout,
        Step::Cors,
        Step::Zeoclient,
        Step::Zeopack,
        Step::Zeoserver,
        Step::ZeoBindPort,
        Step::HttpPort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Step::Buildout => "buildout",
            Step::Cors => "cors",
            Step::Zeoclient => "zeoclient",
            Step::Zeopack => "zeopack",
            Step::Zeoserver => "zeoserver",
            Step::ZeoBindPort => "zeo-bind-port",
            Step::HttpPort => "http-port",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::Buildout => "generate custom.cfg from add-on, site and version variables",
            Step::Cors => "write the CORS policy override when any CORS_ variable is set",
            Step::Zeoclient => "replace <blobstorage> in zope.conf with a <zeoclient> block",
            Step::Zeopack => "point the zeopack helper at ZEO_ADDRESS",
            Step::Zeoserver => "disable pack-keep-old in the ZEO storage config",
            Step::ZeoBindPort => "rewrite the ZEO server bind address",
            Step::HttpPort => "rewrite the instance HTTP listener port",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Step {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let normalized = match normalized.as_str() {
            "set-zeo-bind-port" => "zeo-bind-port",
            "set-http-port" => "http-port",
            other => other,
        };
        Step::ALL.into_iter().find(|step| step.name() == normalized).ok_or_else(|| {
            let expected: Vec<&str> = Step::ALL.iter().map(|step| step.name()).collect();
            AppError::UnknownStep(s.to_string(), expected.join(", "))
        })
    }
}

/// What a single step did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    /// Trigger variables missing, guard marker found, or target absent.
    Skipped { reason: String },
    /// The step ran but produced identical content.
    Unchanged,
    /// The step wrote these files.
    Written { paths: Vec<PathBuf> },
}

impl StepOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        StepOutcome::Skipped { reason: reason.into() }
    }

    pub fn written(paths: Vec<PathBuf>) -> Self {
        if paths.is_empty() { StepOutcome::Unchanged } else { StepOutcome::Written { paths } }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, StepOutcome::Written { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: Step,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

/// Ordered per-step results of one `setup` run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetupReport {
    pub steps: Vec<StepReport>,
}

impl SetupReport {
    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.steps.iter().find(|report| report.step == step).map(|report| &report.outcome)
    }

    /// Every file written during the run, in write order, without duplicates.
    pub fn written_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = Vec::new();
        for report in &self.steps {
            if let StepOutcome::Written { paths: written } = &report.outcome {
                for path in written {
                    if !paths.contains(path) {
                        paths.push(path.clone());
                    }
                }
            }
        }
        paths
    }
}
