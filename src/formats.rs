//! Format tags reported by the classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A syntactic format a string can be classified as.
///
/// Variant order is the check order used by the classifier, so sorting a
/// list of tags always yields classifier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatTag {
    Url,
    Ipv4,
    Ipv6,
    Email,
    PhoneNumber,
}

impl FormatTag {
    /// All tags in check order.
    pub const ALL: [FormatTag; 5] = [
        FormatTag::Url,
        FormatTag::Ipv4,
        FormatTag::Ipv6,
        FormatTag::Email,
        FormatTag::PhoneNumber,
    ];

    /// Stable machine-readable name, as used in JSON output.
    pub fn name(self) -> &'static str {
        match self {
            FormatTag::Url => "url",
            FormatTag::Ipv4 => "ipv4",
            FormatTag::Ipv6 => "ipv6",
            FormatTag::Email => "email",
            FormatTag::PhoneNumber => "phone_number",
        }
    }

    /// Human-readable label, as printed in text output.
    pub fn label(self) -> &'static str {
        match self {
            FormatTag::PhoneNumber => "phone number",
            other => other.name(),
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
