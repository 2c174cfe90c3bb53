//! Test doubles and common utilities for lifecycle contract tests

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use starchart_core::record::{DnsRecord, ExpiredRecord, RecordId, RecordTuple};
use starchart_core::traits::{CreateRecord, RecordChanges, RecordStore};
use starchart_core::{
    Error, LifecycleManager, MemoryRecordStore, RecordType, StarchartConfig,
};

pub const ROOT_DOMAIN: &str = "starchart.com";

/// Build a manager over a fresh memory store with the given quota limit
pub fn manager_with_limit(limit: Option<u32>) -> (LifecycleManager, Arc<MemoryRecordStore>) {
    let store = Arc::new(MemoryRecordStore::new());
    let mut config = StarchartConfig::new(ROOT_DOMAIN);
    config.user_record_limit = limit;

    let manager =
        LifecycleManager::new(store.clone(), config).expect("manager construction succeeds");
    (manager, store)
}

/// An A-record creation request for the given user and subdomain
pub fn a_record(username: &str, subdomain: &str, value: &str) -> RecordTuple {
    RecordTuple::new(username, RecordType::A, subdomain, value)
}

/// A record store that counts calls, delegating to a memory store
///
/// Used to verify which store capabilities an operation actually touches.
#[derive(Clone, Default)]
pub struct CountingRecordStore {
    inner: MemoryRecordStore,
    create_calls: Arc<AtomicUsize>,
    count_by_username_calls: Arc<AtomicUsize>,
    update_calls: Arc<AtomicUsize>,
}

impl CountingRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn count_by_username_calls(&self) -> usize {
        self.count_by_username_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for CountingRecordStore {
    async fn create(&self, fields: CreateRecord) -> Result<Option<DnsRecord>, Error> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create(fields).await
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<DnsRecord>, Error> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<DnsRecord>, Error> {
        self.inner.find_by_username(username).await
    }

    async fn count_by_username(&self, username: &str) -> Result<u64, Error> {
        self.count_by_username_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.count_by_username(username).await
    }

    async fn count_by_tuple(&self, tuple: &RecordTuple) -> Result<u64, Error> {
        self.inner.count_by_tuple(tuple).await
    }

    async fn update(&self, id: RecordId, changes: RecordChanges) -> Result<DnsRecord, Error> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.update(id, changes).await
    }

    async fn delete(&self, id: RecordId) -> Result<DnsRecord, Error> {
        self.inner.delete(id).await
    }

    async fn find_expired(&self, now: DateTime<Utc>) -> Result<Vec<ExpiredRecord>, Error> {
        self.inner.find_expired(now).await
    }
}

/// A record store whose create always refuses (returns no record)
///
/// Models a store-level constraint rejecting a write the engine's advisory
/// checks already passed.
#[derive(Clone, Default)]
pub struct RefusingRecordStore {
    inner: MemoryRecordStore,
}

impl RefusingRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for RefusingRecordStore {
    async fn create(&self, _fields: CreateRecord) -> Result<Option<DnsRecord>, Error> {
        Ok(None)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<DnsRecord>, Error> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<DnsRecord>, Error> {
        self.inner.find_by_username(username).await
    }

    async fn count_by_username(&self, username: &str) -> Result<u64, Error> {
        self.inner.count_by_username(username).await
    }

    async fn count_by_tuple(&self, tuple: &RecordTuple) -> Result<u64, Error> {
        self.inner.count_by_tuple(tuple).await
    }

    async fn update(&self, id: RecordId, changes: RecordChanges) -> Result<DnsRecord, Error> {
        self.inner.update(id, changes).await
    }

    async fn delete(&self, id: RecordId) -> Result<DnsRecord, Error> {
        self.inner.delete(id).await
    }

    async fn find_expired(&self, now: DateTime<Utc>) -> Result<Vec<ExpiredRecord>, Error> {
        self.inner.find_expired(now).await
    }
}
