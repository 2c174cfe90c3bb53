//! Record data model
//!
//! The central entity is [`DnsRecord`]: a user-owned DNS entry scoped under
//! `<subdomain>.<username>.<root-domain>`. The `(username, type, subdomain,
//! value)` tuple is unique across all records; `expires_at` marks the end of
//! the record's validity window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned by the record store on creation
pub type RecordId = i64;

/// DNS record type
///
/// A, AAAA and CNAME are self-serviceable; TXT and MX exist in the data
/// model but are not accepted through the validation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// A record (IPv4 address)
    A,
    /// AAAA record (IPv6 address)
    Aaaa,
    /// CNAME record (hostname alias)
    Cname,
    /// TXT record (free-form text)
    Txt,
    /// MX record (mail exchange)
    Mx,
}

impl RecordType {
    /// Uppercase wire/display name for the record type
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Txt => "TXT",
            RecordType::Mx => "MX",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::Aaaa),
            "CNAME" => Ok(RecordType::Cname),
            "TXT" => Ok(RecordType::Txt),
            "MX" => Ok(RecordType::Mx),
            other => Err(crate::Error::validation(format!(
                "unknown record type: {other}"
            ))),
        }
    }
}

/// Stored lifecycle status of a record
///
/// Only the pending/active distinction is authoritative in storage; expiry
/// is a view over `expires_at` versus the current time. `Expired` exists so
/// an outer layer that persists sweep results stays representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Created, not yet provisioned with the DNS provider
    Pending,
    /// Provisioned and inside its validity window
    Active,
    /// Past its validity window
    Expired,
}

/// A user-owned DNS record entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Store-assigned identifier
    pub id: RecordId,
    /// Owning user
    pub username: String,
    /// Record type; determines value semantics
    pub record_type: RecordType,
    /// Requested name, scoped under `<username>.<root-domain>`
    pub subdomain: String,
    /// Target value (IP literal or hostname, per `record_type`)
    pub value: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Optional course tag
    pub course: Option<String>,
    /// Optional ports annotation
    pub ports: Option<String>,
    /// Stored lifecycle status
    pub status: RecordStatus,
    /// End of the validity window
    pub expires_at: DateTime<Utc>,
    /// Store-assigned creation timestamp (immutable)
    pub created_at: DateTime<Utc>,
}

impl DnsRecord {
    /// Fully qualified name of this record under the given root domain
    pub fn fqdn(&self, root_domain: &str) -> String {
        format!("{}.{}.{}", self.subdomain, self.username, root_domain)
    }

    /// Whether the record's validity window has passed at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// The uniqueness tuple of this record
    pub fn tuple(&self) -> RecordTuple {
        RecordTuple {
            username: self.username.clone(),
            record_type: self.record_type,
            subdomain: self.subdomain.clone(),
            value: self.value.clone(),
        }
    }
}

/// The `(username, type, subdomain, value)` combination whose uniqueness is
/// enforced. Also the payload of a creation request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordTuple {
    /// Owning user
    pub username: String,
    /// Record type
    pub record_type: RecordType,
    /// Requested name
    pub subdomain: String,
    /// Target value
    pub value: String,
}

impl RecordTuple {
    /// Create a record tuple
    pub fn new(
        username: impl Into<String>,
        record_type: RecordType,
        subdomain: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            record_type,
            subdomain: subdomain.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for RecordTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.username, self.record_type, self.subdomain, self.value
        )
    }
}

/// Patch accepted by [`crate::LifecycleManager::update`]
///
/// Either a status-only change, or a full content change with optional
/// metadata. `None` metadata fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DnsRecordPatch {
    /// Change only the lifecycle status
    Status {
        /// New status
        status: RecordStatus,
    },
    /// Replace the record content
    Content {
        /// New record type
        record_type: RecordType,
        /// New subdomain
        subdomain: String,
        /// New value
        value: String,
        /// New description, if provided
        #[serde(default)]
        description: Option<String>,
        /// New course tag, if provided
        #[serde(default)]
        course: Option<String>,
        /// New ports annotation, if provided
        #[serde(default)]
        ports: Option<String>,
        /// New status, if provided
        #[serde(default)]
        status: Option<RecordStatus>,
    },
}

impl DnsRecordPatch {
    /// The status this patch sets, if any
    pub fn status(&self) -> Option<RecordStatus> {
        match self {
            DnsRecordPatch::Status { status } => Some(*status),
            DnsRecordPatch::Content { status, .. } => *status,
        }
    }
}

/// Owner details joined onto expired records for sweep/notification use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOwner {
    /// Owning user
    pub username: String,
    /// Contact address, when known to the store
    pub email: Option<String>,
    /// Display name, when known to the store
    pub display_name: Option<String>,
}

impl RecordOwner {
    /// Owner entry carrying only the username
    pub fn bare(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
            display_name: None,
        }
    }
}

/// An expired record joined with its owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiredRecord {
    /// The expired record
    pub record: DnsRecord,
    /// Its owner
    pub owner: RecordOwner,
}
