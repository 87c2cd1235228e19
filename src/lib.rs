//! Classify strings as URLs, IPv4/IPv6 addresses, email addresses and phone
//! numbers.
//!
//! Matching is purely syntactic. URL, email and phone patterns are anchored
//! at the start of the string only, so trailing text after a valid prefix
//! does not prevent a match. IP addresses are checked with the standard
//! library parser.
//!
//! ```
//! use wvalidate::{Classifier, FormatTag};
//!
//! let classifier = Classifier::new();
//! assert_eq!(classifier.classify("192.168.1.1"), vec![FormatTag::Ipv4]);
//! assert!(classifier.is_email("user@example.com"));
//! assert!(classifier.classify("").is_empty());
//! ```

// Export modules for library usage
pub mod cache;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formats;
pub mod io;
pub mod patterns;
pub mod predicates;

// Re-export commonly used types
pub use crate::cache::{CacheStats, LruCache, DEFAULT_CAPACITY};
pub use crate::classifier::{Classification, Classifier, ClassifierStats};
pub use crate::config::ValidateConfig;
pub use crate::errors::{Error, Result};
pub use crate::formats::FormatTag;
pub use crate::io::output::OutputFormat;
