use crate::config::CONFIG_FILE_NAME;
use crate::errors::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# wvalidate configuration

[cache]
# Entries remembered per format check, and for whole-string results
capacity = 128

[output]
# "text" or "json"
format = "text"
# Report strings that matched no format
verbose = false
"#;

/// Write a default `.wvalidate.toml` into `dir`, returning its path.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(Error::configuration(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )));
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    log::debug!("Wrote default config to {}", config_path.display());
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_and_validate_config, ValidateConfig};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, ValidateConfig::default());
    }

    #[test]
    fn test_init_config_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = init_config(temp_dir.path(), false).unwrap();
        assert!(path.exists());

        let second = init_config(temp_dir.path(), false);
        assert!(matches!(second, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_init_config_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[cache]\ncapacity = 3\n").unwrap();

        init_config(temp_dir.path(), true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
