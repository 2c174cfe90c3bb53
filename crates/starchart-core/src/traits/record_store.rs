// # Record Store Trait
//
// Defines the persistence capability consumed by the lifecycle engine.
//
// ## Purpose
//
// The engine treats storage as an external collaborator: create, lookups,
// counts, update, delete, and the expiry sweep query. Implementations own
// their transaction/timeout policy; the engine performs no retries.
//
// ## Uniqueness
//
// The engine checks tuple uniqueness before creating, but that check is
// advisory under concurrency. The store is the authoritative defense and
// may refuse a create (returning `Ok(None)`) when its own uniqueness
// constraint would be violated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::record::{DnsRecord, ExpiredRecord, RecordId, RecordStatus, RecordType};

/// Full field set for creating a record
///
/// The lifecycle engine builds this from a [`crate::record::RecordTuple`]
/// after computing the initial status and expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRecord {
    /// Owning user
    pub username: String,
    /// Record type
    pub record_type: RecordType,
    /// Requested name
    pub subdomain: String,
    /// Target value
    pub value: String,
    /// Initial status
    pub status: RecordStatus,
    /// End of the validity window
    pub expires_at: DateTime<Utc>,
}

/// Field changes for an update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordChanges {
    /// New record type
    pub record_type: Option<RecordType>,
    /// New subdomain
    pub subdomain: Option<String>,
    /// New value
    pub value: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New course tag
    pub course: Option<String>,
    /// New ports annotation
    pub ports: Option<String>,
    /// New status
    pub status: Option<RecordStatus>,
    /// New expiry timestamp
    pub expires_at: Option<DateTime<Utc>>,
}

/// Trait for record store implementations
///
/// All methods must be safe to call concurrently from multiple tasks.
/// Implementations perform I/O and are expected to complete or fail within
/// their own timeout policy; the engine never blocks indefinitely on them.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create a record, assigning its id and creation timestamp
    ///
    /// # Returns
    ///
    /// - `Ok(Some(DnsRecord))`: the created record
    /// - `Ok(None)`: the store refused the create (e.g. uniqueness constraint)
    /// - `Err(Error)`: storage error
    async fn create(&self, fields: CreateRecord) -> Result<Option<DnsRecord>, crate::Error>;

    /// Find a record by id
    async fn find_by_id(&self, id: RecordId) -> Result<Option<DnsRecord>, crate::Error>;

    /// All records owned by a user
    async fn find_by_username(&self, username: &str) -> Result<Vec<DnsRecord>, crate::Error>;

    /// Number of records owned by a user
    async fn count_by_username(&self, username: &str) -> Result<u64, crate::Error>;

    /// Number of records matching the uniqueness tuple exactly
    async fn count_by_tuple(
        &self,
        tuple: &crate::record::RecordTuple,
    ) -> Result<u64, crate::Error>;

    /// Apply field changes to an existing record
    ///
    /// # Returns
    ///
    /// - `Ok(DnsRecord)`: the record after the update
    /// - `Err(Error::NotFound)`: no record with that id
    /// - `Err(Error)`: storage error
    async fn update(&self, id: RecordId, changes: RecordChanges)
    -> Result<DnsRecord, crate::Error>;

    /// Delete a record, returning it
    ///
    /// # Returns
    ///
    /// - `Ok(DnsRecord)`: the deleted record
    /// - `Err(Error::NotFound)`: no record with that id
    async fn delete(&self, id: RecordId) -> Result<DnsRecord, crate::Error>;

    /// All records whose `expires_at` is strictly before `now`, joined with
    /// owner information for sweep/notification use. Read-only; must not
    /// mutate record status.
    async fn find_expired(&self, now: DateTime<Utc>)
    -> Result<Vec<ExpiredRecord>, crate::Error>;
}
