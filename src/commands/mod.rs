//! CLI command implementations for wvalidate operations.
//!
//! Available commands:
//! - **validate**: Classify a batch of strings and report the formats they match
//! - **init**: Write a default `.wvalidate.toml` configuration file

pub mod init;
pub mod validate;

pub use init::init_config;
pub use validate::{classify_batch, dedupe, ValidateRequest};
