// # Memory Record Store
//
// In-memory implementation of RecordStore.
//
// ## Purpose
//
// Provides a simple, fast record store that doesn't persist across
// restarts. Useful for testing and for embedding the engine without a
// database.
//
// ## Uniqueness
//
// Unlike the engine's advisory pre-check, this store enforces the
// (username, type, subdomain, value) uniqueness constraint itself: a
// duplicate create is refused with `Ok(None)`, mirroring what a unique
// index does in a SQL-backed store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::record::{
    DnsRecord, ExpiredRecord, RecordId, RecordOwner, RecordTuple,
};
use crate::traits::record_store::{CreateRecord, RecordChanges, RecordStore};
use crate::Error;

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<RecordId, DnsRecord>,
    owners: HashMap<String, RecordOwner>,
    next_id: RecordId,
}

/// In-memory record store implementation
///
/// All state lives in a HashMap behind a RwLock; nothing survives a
/// restart. Owner details for the expiry join can be registered with
/// [`MemoryRecordStore::register_owner`]; unregistered users are joined
/// with a bare owner entry.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryRecordStore {
    /// Create a new empty memory record store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register owner details used by the expiry join
    pub async fn register_owner(&self, owner: RecordOwner) {
        let mut guard = self.inner.write().await;
        guard.owners.insert(owner.username.clone(), owner);
    }

    /// Get the number of records in the store
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }

    /// Clear all records from the store
    pub async fn clear(&self) {
        let mut guard = self.inner.write().await;
        guard.records.clear();
    }
}

fn matches_tuple(record: &DnsRecord, tuple: &RecordTuple) -> bool {
    record.username == tuple.username
        && record.record_type == tuple.record_type
        && record.subdomain == tuple.subdomain
        && record.value == tuple.value
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create(&self, fields: CreateRecord) -> Result<Option<DnsRecord>, Error> {
        let mut guard = self.inner.write().await;

        let tuple = RecordTuple {
            username: fields.username.clone(),
            record_type: fields.record_type,
            subdomain: fields.subdomain.clone(),
            value: fields.value.clone(),
        };
        if guard.records.values().any(|r| matches_tuple(r, &tuple)) {
            return Ok(None);
        }

        guard.next_id += 1;
        let record = DnsRecord {
            id: guard.next_id,
            username: fields.username,
            record_type: fields.record_type,
            subdomain: fields.subdomain,
            value: fields.value,
            description: None,
            course: None,
            ports: None,
            status: fields.status,
            expires_at: fields.expires_at,
            created_at: Utc::now(),
        };
        guard.records.insert(record.id, record.clone());
        Ok(Some(record))
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<DnsRecord>, Error> {
        let guard = self.inner.read().await;
        Ok(guard.records.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<DnsRecord>, Error> {
        let guard = self.inner.read().await;
        let mut records: Vec<DnsRecord> = guard
            .records
            .values()
            .filter(|r| r.username == username)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    async fn count_by_username(&self, username: &str) -> Result<u64, Error> {
        let guard = self.inner.read().await;
        Ok(guard
            .records
            .values()
            .filter(|r| r.username == username)
            .count() as u64)
    }

    async fn count_by_tuple(&self, tuple: &RecordTuple) -> Result<u64, Error> {
        let guard = self.inner.read().await;
        Ok(guard
            .records
            .values()
            .filter(|r| matches_tuple(r, tuple))
            .count() as u64)
    }

    async fn update(&self, id: RecordId, changes: RecordChanges) -> Result<DnsRecord, Error> {
        let mut guard = self.inner.write().await;
        let record = guard
            .records
            .get_mut(&id)
            .ok_or_else(|| Error::not_found(format!("record id {id}")))?;

        if let Some(record_type) = changes.record_type {
            record.record_type = record_type;
        }
        if let Some(subdomain) = changes.subdomain {
            record.subdomain = subdomain;
        }
        if let Some(value) = changes.value {
            record.value = value;
        }
        if let Some(description) = changes.description {
            record.description = Some(description);
        }
        if let Some(course) = changes.course {
            record.course = Some(course);
        }
        if let Some(ports) = changes.ports {
            record.ports = Some(ports);
        }
        if let Some(status) = changes.status {
            record.status = status;
        }
        if let Some(expires_at) = changes.expires_at {
            record.expires_at = expires_at;
        }

        Ok(record.clone())
    }

    async fn delete(&self, id: RecordId) -> Result<DnsRecord, Error> {
        let mut guard = self.inner.write().await;
        guard
            .records
            .remove(&id)
            .ok_or_else(|| Error::not_found(format!("record id {id}")))
    }

    async fn find_expired(&self, now: DateTime<Utc>) -> Result<Vec<ExpiredRecord>, Error> {
        let guard = self.inner.read().await;
        let mut expired: Vec<ExpiredRecord> = guard
            .records
            .values()
            .filter(|r| r.expires_at < now)
            .map(|r| ExpiredRecord {
                record: r.clone(),
                owner: guard
                    .owners
                    .get(&r.username)
                    .cloned()
                    .unwrap_or_else(|| RecordOwner::bare(r.username.clone())),
            })
            .collect();
        expired.sort_by_key(|e| e.record.id);
        Ok(expired)
    }
}
