//! Configuration file discovery and loading.

use crate::config::schema::EnforcerConfig;
use crate::config::validator::validate;
use crate::error::{EnforcerError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tool-enforcer.yml";

/// Resolve which config file to read.
///
/// An explicit path wins; relative explicit paths are taken from `cwd`.
pub fn resolve_config_path(cwd: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.join(DEFAULT_CONFIG_FILE),
    }
}

/// Load a config file and parse it into EnforcerConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(path: &Path) -> Result<EnforcerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnforcerError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnforcerError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    tracing::debug!(
        "Loaded {} binaries from {}",
        config.binaries.len(),
        path.display()
    );
    Ok(config)
}

/// Parse YAML content into EnforcerConfig.
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<EnforcerConfig> {
    serde_yaml::from_str(content).map_err(|e| EnforcerError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file and validate every entry.
///
/// # Errors
///
/// As [`load_config`], plus `ConfigValidationError` when any entry names an
/// unsupported program or carries an unparseable requirement.
pub fn load_and_validate(path: &Path) -> Result<EnforcerConfig> {
    let config = load_config(path)?;
    validate(&config)?;
    Ok(config)
}
