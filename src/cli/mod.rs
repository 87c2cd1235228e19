//! CLI module for wvalidate
//!
//! - Argument parsing (`args`)
//! - Merging config file values with flags (`config_builder`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod config_builder;
pub mod setup;

pub use args::{Cli, Commands};
pub use config_builder::apply_cli_overrides;
pub use setup::{configure_thread_pool, get_worker_count, init_logging};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
