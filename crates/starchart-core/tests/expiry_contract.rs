//! Expiry Contract: lazy, query-time expiration
//!
//! Verifies that "expired" is a strict `expires_at < now` predicate: the
//! sweep returns exactly the records past their window, joined with owner
//! details, and never mutates stored status.

mod common;

use chrono::{Duration, Utc};
use common::*;
use starchart_core::record::{RecordOwner, RecordStatus};
use starchart_core::traits::{RecordChanges, RecordStore};

#[tokio::test]
async fn list_expired_returns_strictly_past_records_only() {
    let (manager, store) = manager_with_limit(None);

    let past = manager
        .create(a_record("jdo12", "old", "192.168.0.1"))
        .await
        .unwrap();
    let future = manager
        .create(a_record("jdo12", "fresh", "192.168.0.2"))
        .await
        .unwrap();

    store
        .update(
            past,
            RecordChanges {
                expires_at: Some(Utc::now() - Duration::seconds(1)),
                ..RecordChanges::default()
            },
        )
        .await
        .unwrap();

    let expired = manager.list_expired().await.unwrap();
    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].record.id, past);
    assert!(expired.iter().all(|e| e.record.id != future));
}

#[tokio::test]
async fn boundary_is_strict_at_the_query_instant() {
    let store = std::sync::Arc::new(starchart_core::MemoryRecordStore::new());
    let now = Utc::now();

    let record = store
        .create(starchart_core::CreateRecord {
            username: "jdo12".to_string(),
            record_type: starchart_core::RecordType::A,
            subdomain: "edge".to_string(),
            value: "192.168.0.1".to_string(),
            status: RecordStatus::Active,
            expires_at: now,
        })
        .await
        .unwrap()
        .unwrap();

    // expires_at == now is not expired; one tick later it is.
    assert!(store.find_expired(now).await.unwrap().is_empty());
    let later = now + Duration::milliseconds(1);
    let expired = store.find_expired(later).await.unwrap();
    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].record.id, record.id);
}

#[tokio::test]
async fn sweep_joins_owner_and_does_not_mutate_status() {
    let (manager, store) = manager_with_limit(None);
    store
        .register_owner(RecordOwner {
            username: "jdo12".to_string(),
            email: Some("jdo12@example.com".to_string()),
            display_name: Some("Jane Doe".to_string()),
        })
        .await;

    let id = manager
        .create(a_record("jdo12", "old", "192.168.0.1"))
        .await
        .unwrap();
    store
        .update(
            id,
            RecordChanges {
                status: Some(RecordStatus::Active),
                expires_at: Some(Utc::now() - Duration::days(7)),
                ..RecordChanges::default()
            },
        )
        .await
        .unwrap();

    let expired = manager.list_expired().await.unwrap();
    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].owner.email.as_deref(), Some("jdo12@example.com"));

    // The sweep is read-only: the stored record still says active.
    let record = manager.record(id).await.unwrap().unwrap();
    assert_eq!(record.status, RecordStatus::Active);

    // An unregistered owner falls back to a bare entry.
    let other = manager
        .create(a_record("mst11", "old", "192.168.0.9"))
        .await
        .unwrap();
    store
        .update(
            other,
            RecordChanges {
                expires_at: Some(Utc::now() - Duration::days(1)),
                ..RecordChanges::default()
            },
        )
        .await
        .unwrap();

    let expired = manager.list_expired().await.unwrap();
    let bare = expired
        .iter()
        .find(|e| e.record.username == "mst11")
        .expect("mst11 record expired");
    assert_eq!(bare.owner.email, None);
    assert_eq!(bare.owner.username, "mst11");
}
