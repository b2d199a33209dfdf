pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".deploy-init.toml";

/// Get the global config file path (~/.deploy-init.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (project/.deploy-init.toml)
pub fn local_config_path(project_path: &Path) -> PathBuf {
    project_path.join(CONFIG_FILE_NAME)
}

/// Load configuration.
///
/// An explicit path must exist and parse. Otherwise the project-local file is
/// tried first, then the global one, then defaults. Broken implicit files are
/// skipped with a warning.
pub fn load_config(explicit: Option<&Path>, project_path: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        return read_config(path);
    }

    let candidates = project_path
        .map(local_config_path)
        .into_iter()
        .chain(global_config_path());

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match read_config(&candidate) {
            Ok(config) => {
                log::debug!("Loaded configuration from {}", candidate.display());
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring {}: {}", candidate.display(), e),
        }
    }

    Ok(types::Config::default())
}

fn read_config(path: &Path) -> Result<types::Config> {
    let content = fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    parse_config(&content)
}

/// Parse a configuration from TOML text.
pub fn parse_config(content: &str) -> Result<types::Config> {
    toml::from_str(content).map_err(|e| ConfigError::ParsingFailed(e.to_string()).into())
}
