use anyhow::{Context, Result};
use wvalidate::cli::{self, Cli, Commands};
use wvalidate::commands::{self, ValidateRequest};
use wvalidate::config::{self, ValidateConfig};
use wvalidate::Classifier;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging();

    if let Some(Commands::Init { force }) = &cli.command {
        return handle_init(*force);
    }

    let config = load_effective_config(&cli)?;
    let classifier = Classifier::from_config(&config)?;

    let parallel = !cli.no_parallel;
    if parallel {
        cli::configure_thread_pool(cli.jobs);
        log::debug!("Using {} worker threads", cli::get_worker_count(cli.jobs));
    }

    let request = ValidateRequest {
        strings: cli.strings,
        format: config.output.format,
        verbose: config.output.verbose,
        parallel,
    };
    let stdout = std::io::stdout();
    commands::validate::run(&classifier, request, stdout.lock())
        .context("Failed to write results")?;

    if cli.cache_stats {
        eprint!("{}", classifier.stats());
    }
    Ok(())
}

// Side effect handler for `init`
fn handle_init(force: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let path = commands::init_config(&cwd, force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

// Config file (explicit or discovered) with CLI flags applied on top
fn load_effective_config(cli: &Cli) -> Result<ValidateConfig> {
    let file_config = match &cli.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => config::load_config().context("Failed to load .wvalidate.toml")?,
    };
    Ok(cli::apply_cli_overrides(file_config, cli)?)
}
