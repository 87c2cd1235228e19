//! Merge the config file with command-line overrides.

use crate::cli::args::Cli;
use crate::config::ValidateConfig;
use crate::errors::Result;

/// Apply CLI flags on top of `config` and re-validate the result.
///
/// Flags win over file values; `--verbose` can only turn verbosity on.
pub fn apply_cli_overrides(mut config: ValidateConfig, cli: &Cli) -> Result<ValidateConfig> {
    if let Some(capacity) = cli.cache_capacity {
        config.cache.capacity = capacity;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    config.output.verbose |= cli.verbose;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::io::output::OutputFormat;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wvalidate").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_flags_keeps_file_values() {
        let mut file = ValidateConfig::default();
        file.cache.capacity = 9;
        file.output.verbose = true;

        let merged = apply_cli_overrides(file.clone(), &cli(&["x"])).unwrap();
        assert_eq!(merged, file);
    }

    #[test]
    fn test_flags_override_file_values() {
        let merged = apply_cli_overrides(
            ValidateConfig::default(),
            &cli(&["--cache-capacity", "3", "--format", "json", "-v", "x"]),
        )
        .unwrap();

        assert_eq!(merged.cache.capacity, 3);
        assert_eq!(merged.output.format, OutputFormat::Json);
        assert!(merged.output.verbose);
    }

    #[test]
    fn test_zero_capacity_flag_rejected() {
        let result = apply_cli_overrides(
            ValidateConfig::default(),
            &cli(&["--cache-capacity", "0", "x"]),
        );
        assert!(matches!(result, Err(Error::InvalidCapacity(0))));
    }
}
