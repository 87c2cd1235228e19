//! Uncached format predicates.
//!
//! Pure functions of their input. [`Classifier`](crate::Classifier) wraps
//! each of them in its own LRU cache; call these directly when memoization
//! is not wanted.

use crate::formats::FormatTag;
use crate::patterns::{self, IpVersion};

/// Predicate signature shared by all formats.
pub type Predicate = fn(&str) -> bool;

/// Prefix match against the URL pattern.
pub fn is_url(candidate: &str) -> bool {
    patterns::url_prefix_matches(candidate)
}

/// The address parser accepts `candidate` as an IPv4 address.
pub fn is_ipv4(candidate: &str) -> bool {
    patterns::ip_version(candidate) == Some(IpVersion::V4)
}

/// The address parser accepts `candidate` as an IPv6 address.
pub fn is_ipv6(candidate: &str) -> bool {
    patterns::ip_version(candidate) == Some(IpVersion::V6)
}

/// Prefix match against the email pattern.
pub fn is_email(candidate: &str) -> bool {
    patterns::email_prefix_matches(candidate)
}

/// Prefix match against the phone pattern after removing spaces, tabs and
/// carriage returns.
pub fn is_phone_number(candidate: &str) -> bool {
    patterns::phone_prefix_matches(&patterns::strip_phone_separators(candidate))
}

/// Predicate for a given tag.
pub fn predicate_for(tag: FormatTag) -> Predicate {
    match tag {
        FormatTag::Url => is_url,
        FormatTag::Ipv4 => is_ipv4,
        FormatTag::Ipv6 => is_ipv6,
        FormatTag::Email => is_email,
        FormatTag::PhoneNumber => is_phone_number,
    }
}

/// Run every predicate in check order and collect the matching tags.
pub fn classify(candidate: &str) -> Vec<FormatTag> {
    FormatTag::ALL
        .into_iter()
        .filter(|tag| predicate_for(*tag)(candidate))
        .collect()
}
