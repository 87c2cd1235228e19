use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wvalidate")]
#[command(
    about = "Takes URL, IPv4, IPv6, Email address, Phone number (s) and validates them.",
    long_about = None
)]
#[command(version)]
#[command(subcommand_negates_reqs = true, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Strings to validate
    #[arg(required = true, num_args = 1..)]
    pub strings: Vec<String>,

    /// Output more details (also report strings with no valid types)
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of searching for .wvalidate.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Entries remembered per cache (overrides the config file)
    #[arg(long = "cache-capacity", env = "WVALIDATE_CACHE_CAPACITY")]
    pub cache_capacity: Option<usize>,

    /// Print cache hit/miss counters to stderr when done
    #[arg(long = "cache-stats")]
    pub cache_stats: bool,

    /// Disable parallel processing
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,

    /// Number of threads to use (0 = use all cores)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    pub jobs: usize,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Write a default .wvalidate.toml into the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_strings_required_without_init() {
        assert!(Cli::try_parse_from(["wvalidate"]).is_err());

        let cli = Cli::try_parse_from(["wvalidate", "init"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Init { force: false }));
        assert!(cli.strings.is_empty());
    }

    #[test]
    fn test_init_with_force() {
        let cli = Cli::try_parse_from(["wvalidate", "init", "--force"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Init { force: true }));
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "wvalidate",
            "-v",
            "--format",
            "json",
            "--cache-capacity",
            "4",
            "--no-parallel",
            "a.com",
            "b.com",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.cache_capacity, Some(4));
        assert!(cli.no_parallel);
        assert_eq!(cli.strings, vec!["a.com", "b.com"]);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_init_after_strings_is_a_string() {
        let cli = Cli::try_parse_from(["wvalidate", "a.com", "init"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.strings, vec!["a.com", "init"]);
    }

    #[test]
    fn test_force_requires_init() {
        assert!(Cli::try_parse_from(["wvalidate", "--force", "a.com"]).is_err());
        assert!(Cli::try_parse_from(["wvalidate", "a.com", "--force"]).is_err());
    }
}
