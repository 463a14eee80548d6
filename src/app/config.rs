//! Path configuration loading: built-in layout, optional TOML file, CLI flags.

use std::fs;
use std::path::Path;

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, InstancePaths, PathsConfig};

/// Resolve target paths with precedence CLI flags > config file > defaults.
pub fn load_paths(
    config_file: Option<&Path>,
    cli_overrides: PathsConfig,
) -> Result<InstancePaths, AppError> {
    let from_file = match config_file {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            let content = fs::read_to_string(path).map_err(|err| AppError::read(path, err))?;
            parse_config_content(path, &content)?
        }
        None => PathsConfig::default(),
    };
    Ok(from_file.merge(cli_overrides).into_paths())
}
