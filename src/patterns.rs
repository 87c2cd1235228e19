//! Pattern Library
//!
//! Matching rules behind the format predicates:
//! - URL, email and phone number patterns (compiled once, prefix-anchored)
//! - IP address parsing (delegated to `std::net::IpAddr`)
//!
//! Every text pattern is anchored at the start of the candidate only. A
//! candidate matches when the pattern matches from position 0, whatever
//! follows the matched prefix. `Regex::is_match` with a leading `^` gives
//! exactly that: it succeeds if *some* match begins at offset 0.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::net::IpAddr;

/// Optional scheme, optional `www.`, a 2-256 char host token, a 2-6 letter
/// top-level label and an optional path/query tail.
pub const URL_PATTERN: &str = r"^(http(s)?://.)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%_+.~#?&/=]*)";

/// International phone numbers, with and without country code.
pub const PHONE_PATTERN: &str = r"^((?:\+|00)[17](?: |-)?|(?:\+|00)[1-9]\d{0,2}(?: |-)?|(?:\+|00)1-\d{3}(?: |-)?)?(0\d|\([0-9]{3}\)|[1-9]{0,3})(?:((?: |-)[0-9]{2}){4}|((?:[0-9]{2}){4})|((?: |-)[0-9]{3}(?: |-)[0-9]{4})|([0-9]{7}))";

/// The widely circulated "RFC 5322 official standard" email pattern.
///
/// The second alternative of the bracketed domain literal
/// (`[a-z0-9-]*[a-z0-9]:...`, with the overlapping `\x21-\x5a\x53-\x7f`
/// range) is kept exactly as circulated even though it is not RFC-accurate.
pub const EMAIL_PATTERN: &str = r##"^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])"##;

// Pre-compiled regex patterns using once_cell
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(URL_PATTERN).expect("URL pattern compiles"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Characters removed from a candidate before phone matching.
///
/// Only these three; newlines, form feeds and other whitespace stay.
pub const PHONE_STRIPPED_CHARS: [char; 3] = [' ', '\t', '\r'];

/// IP version reported by the address parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

/// True if the URL pattern matches a prefix of `candidate`.
pub fn url_prefix_matches(candidate: &str) -> bool {
    URL_RE.is_match(candidate)
}

/// True if the email pattern matches a prefix of `candidate`.
pub fn email_prefix_matches(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

/// True if the phone pattern matches a prefix of `candidate` as given.
///
/// Callers wanting the separator-insensitive check should strip first
/// with [`strip_phone_separators`].
pub fn phone_prefix_matches(candidate: &str) -> bool {
    PHONE_RE.is_match(candidate)
}

/// Remove spaces, tabs and carriage returns. Borrows when there is nothing
/// to remove.
pub fn strip_phone_separators(candidate: &str) -> Cow<'_, str> {
    if candidate.contains(&PHONE_STRIPPED_CHARS[..]) {
        Cow::Owned(
            candidate
                .chars()
                .filter(|c| !PHONE_STRIPPED_CHARS.contains(c))
                .collect(),
        )
    } else {
        Cow::Borrowed(candidate)
    }
}

/// Parse `candidate` as an IP address and report its version.
///
/// `None` means "not an address"; parser errors are swallowed here.
pub fn ip_version(candidate: &str) -> Option<IpVersion> {
    match candidate.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => Some(IpVersion::V4),
        Ok(IpAddr::V6(_)) => Some(IpVersion::V6),
        Err(_) => None,
    }
}
