//! Configuration loading from `.wvalidate.toml`.
//!
//! ```toml
//! [cache]
//! capacity = 128
//!
//! [output]
//! format = "text"
//! verbose = false
//! ```
//!
//! Every key is optional. Values are validated at load time so a bad
//! capacity fails before any string is classified.

use crate::cache::DEFAULT_CAPACITY;
use crate::errors::{Error, Result};
use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".wvalidate.toml";

/// How many directories (starting with the working directory) are searched
pub const MAX_TRAVERSAL_DEPTH: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidateConfig {
    pub cache: CacheConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Entries kept per cache (one cache per format plus the aggregate)
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Also report strings that matched no format
    pub verbose: bool,
}

impl ValidateConfig {
    /// Reject values the classifier cannot be built with
    pub fn validate(&self) -> Result<()> {
        if self.cache.capacity == 0 {
            return Err(Error::InvalidCapacity(self.cache.capacity));
        }
        Ok(())
    }
}

/// Read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<ValidateConfig> {
    let config = toml::from_str::<ValidateConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly requested config file. Missing files are an error.
pub fn load_config_from(path: &Path) -> Result<ValidateConfig> {
    let contents = read_config_file(path).map_err(|e| Error::config_read(path, e))?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try one candidate location during discovery.
///
/// `Ok(None)` when the file does not exist; read and parse failures are
/// returned so a broken config is never silently ignored.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Result<Option<ValidateConfig>> {
    match read_config_file(config_path) {
        Ok(contents) => {
            let config = parse_and_validate_config(&contents)?;
            log::debug!("Loaded config from {}", config_path.display());
            Ok(Some(config))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::config_read(config_path, e)),
    }
}

/// Generate `start` and its ancestors, at most `max_depth` of them
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for [`CONFIG_FILE_NAME`].
///
/// Returns the default config when no file is found.
pub fn discover_config(start: PathBuf) -> Result<ValidateConfig> {
    for dir in directory_ancestors(start, MAX_TRAVERSAL_DEPTH) {
        if let Some(config) = try_load_config_from_path(&dir.join(CONFIG_FILE_NAME))? {
            return Ok(config);
        }
    }
    log::debug!(
        "No config found after checking {} directories. Using default config.",
        MAX_TRAVERSAL_DEPTH
    );
    Ok(ValidateConfig::default())
}

/// Discover config starting from the current directory
pub fn load_config() -> Result<ValidateConfig> {
    match std::env::current_dir() {
        Ok(current) => discover_config(current),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(ValidateConfig::default())
        }
    }
}
