//! Name and value validation
//!
//! Pure, I/O-free admissibility checks for proposed records. A candidate
//! name must sit exactly one label under the requesting user's own scope
//! (`<label>.<username>.<root-domain>`); a candidate value must parse
//! according to the record type. Malformed input yields `false`, never a
//! panic, so callers can surface a single validation rejection.

use crate::record::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Label words that are never admissible as subdomains
const BLOCKED_LABELS: &[&str] = &["damn", "hell", "crap", "sex", "porn", "nsfw"];

/// Maximum total hostname length accepted for hostname-style values
const MAX_HOSTNAME_LEN: usize = 253;

/// Maximum length of a single hostname label
const MAX_LABEL_LEN: usize = 63;

/// Name and value validator, parameterized by the platform root domain
#[derive(Debug, Clone)]
pub struct Validator {
    root_domain: String,
}

impl Validator {
    /// Create a validator for the given root domain
    pub fn new(root_domain: impl Into<String>) -> Self {
        Self {
            root_domain: root_domain.into(),
        }
    }

    /// Create a validator from engine configuration
    pub fn from_config(config: &crate::StarchartConfig) -> Self {
        Self::new(config.root_domain.clone())
    }

    /// The root domain this validator checks against
    pub fn root_domain(&self) -> &str {
        &self.root_domain
    }

    /// Check that `candidate` is a valid name inside the user's own scope
    ///
    /// The candidate must be exactly `<label>.<username>.<root-domain>`,
    /// compared ASCII case-insensitively. The label must match the allowed
    /// grammar: alphanumerics plus `-` and `_`, no doubled separators, no
    /// leading `-`, no trailing `-` or `_`. A leading `_` is allowed (SRV
    /// and DKIM-style names rely on it). Any extra `.` segment rejects.
    pub fn is_name_valid(&self, candidate: &str, username: &str) -> bool {
        if candidate.is_empty() || username.is_empty() {
            return false;
        }

        let candidate = candidate.to_ascii_lowercase();
        let scope = format!(".{}.{}", username.to_ascii_lowercase(), self.root_domain.to_ascii_lowercase());

        let Some(label) = candidate.strip_suffix(&scope) else {
            return false;
        };

        is_label_valid(label)
    }
}

/// Check the single-label grammar for a requested subdomain
fn is_label_valid(label: &str) -> bool {
    if label.is_empty() {
        return false;
    }

    // Charset: alphanumeric, '-' and '_'. This also rejects any embedded
    // '.' so a candidate with extra segments never reaches the scope check.
    if !label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return false;
    }

    if label.contains("--") || label.contains("__") {
        return false;
    }

    // A leading '_' is allowed; a leading '-' is not.
    if label.starts_with('-') {
        return false;
    }
    if label.ends_with('-') || label.ends_with('_') {
        return false;
    }

    if BLOCKED_LABELS.contains(&label) {
        return false;
    }

    true
}

/// Check that `value` is admissible for the given record type
///
/// - `A`: IPv4 dotted-quad (four octets 0–255)
/// - `AAAA`: IPv6 colon-hex, including valid `::` compression
/// - `CNAME`: non-empty hostname-shaped string
/// - anything else: not self-serviceable, always `false`
pub fn is_value_valid(record_type: RecordType, value: &str) -> bool {
    match record_type {
        RecordType::A => value.parse::<Ipv4Addr>().is_ok(),
        RecordType::Aaaa => value.parse::<Ipv6Addr>().is_ok(),
        RecordType::Cname => is_hostname_shaped(value),
        RecordType::Txt | RecordType::Mx => false,
    }
}

/// Loose hostname shape check: dot-separated labels of alphanumerics and
/// hyphens, no empty labels, no leading/trailing hyphen per label.
fn is_hostname_shaped(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    value.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}
