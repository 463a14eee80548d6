//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::adapters::LocalFilesystem;
use crate::app::commands::paths::PathEntry;
use crate::app::commands::setup::{SetupOptions, SetupResult, WriteMode};
use crate::domain::{AppError, InstancePaths, PathOverrides, PathsConfig, Step, StepOutcome, Variables};

#[derive(Parser)]
#[command(name = "senaite-init")]
#[command(version)]
#[command(
    about = "Configure a SENAITE instance and its ZEO server from environment variables",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    paths: PathArgs,

    /// Log step decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PathArgs {
    /// TOML file with `instance_home` and a `[paths]` table
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Instance home the default layout is resolved against
    #[arg(long, global = true, value_name = "DIR")]
    instance_home: Option<PathBuf>,
    /// zope.conf of the instance
    #[arg(long, global = true, value_name = "FILE")]
    zope_conf: Option<PathBuf>,
    /// Generated buildout manifest
    #[arg(long, global = true, value_name = "FILE")]
    custom_conf: Option<PathBuf>,
    /// zeopack helper script
    #[arg(long, global = true, value_name = "FILE")]
    zeopack: Option<PathBuf>,
    /// CORS policy override file
    #[arg(long, global = true, value_name = "FILE")]
    cors_conf: Option<PathBuf>,
    /// ZEO server config candidate (repeatable; replaces the defaults)
    #[arg(long = "zeo-conf", global = true, value_name = "FILE")]
    zeo_confs: Vec<PathBuf>,
}

impl PathArgs {
    fn overrides(&self) -> PathsConfig {
        PathsConfig {
            instance_home: self.instance_home.clone(),
            paths: PathOverrides {
                zope_conf: self.zope_conf.clone(),
                custom_conf: self.custom_conf.clone(),
                zeopack: self.zeopack.clone(),
                cors_conf: self.cors_conf.clone(),
                zeo_confs: (!self.zeo_confs.is_empty()).then(|| self.zeo_confs.clone()),
                instance_var: None,
            },
        }
    }

    fn resolve(&self) -> Result<InstancePaths, AppError> {
        crate::app::config::load_paths(self.config.as_deref(), self.overrides())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Apply environment variables to the instance configuration files
    #[clap(visible_alias = "s")]
    Setup {
        /// Show what would change without writing anything
        #[arg(long, conflicts_with = "all_or_nothing")]
        dry_run: bool,
        /// Write files only after every step has succeeded
        #[arg(long)]
        all_or_nothing: bool,
        /// Step to leave out (repeatable)
        #[arg(long, value_name = "STEP", value_parser = parse_step)]
        skip: Vec<Step>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved target paths
    Paths {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the configuration steps in run order
    Steps,
}

fn parse_step(value: &str) -> Result<Step, String> {
    value.parse::<Step>().map_err(|err| err.to_string())
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::app::logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Setup { dry_run, all_or_nothing, skip, json } => {
            let mode = if dry_run {
                WriteMode::DryRun
            } else if all_or_nothing {
                WriteMode::AllOrNothing
            } else {
                WriteMode::Direct
            };
            run_setup(&cli.paths, SetupOptions { skip, mode }, json)
        }
        Commands::Paths { json } => run_paths(&cli.paths, json),
        Commands::Steps => {
            for step in Step::ALL {
                println!("{:<14} {}", step.name(), step.description());
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_setup(paths: &PathArgs, options: SetupOptions, json: bool) -> Result<(), AppError> {
    let paths = paths.resolve()?;
    let result = crate::app::commands::setup::execute(
        Variables::from_process(),
        paths,
        LocalFilesystem::new(),
        &options,
    )?;

    if json {
        println!("{}", to_json(&result)?);
    } else {
        print_setup(&result);
    }
    Ok(())
}

fn print_setup(result: &SetupResult) {
    let verb = if result.mode == WriteMode::DryRun { "would write" } else { "wrote" };
    for report in &result.report.steps {
        match &report.outcome {
            StepOutcome::Written { paths } => {
                for path in paths {
                    println!("✅ {}: {} {}", report.step, verb, path.display());
                }
            }
            StepOutcome::Unchanged => println!("   {}: unchanged", report.step),
            StepOutcome::Skipped { reason } => println!("   {}: skipped ({})", report.step, reason),
        }
    }
    if result.mode == WriteMode::DryRun {
        println!("Dry run: {} file(s) pending, nothing written", result.pending.len());
    }
}

fn run_paths(paths: &PathArgs, json: bool) -> Result<(), AppError> {
    let paths = paths.resolve()?;
    let entries = crate::app::commands::paths::execute(&paths, &LocalFilesystem::new());

    if json {
        println!("{}", to_json(&entries)?);
        return Ok(());
    }
    println!("instance_home  {}", paths.instance_home.display());
    for PathEntry { label, path, exists } in &entries {
        let marker = if *exists { "" } else { "  (missing)" };
        println!("{:<14} {}{}", label, path.display(), marker);
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|err| AppError::config_error(format!("Failed to serialize output: {}", err)))
}
