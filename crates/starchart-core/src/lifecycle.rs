//! Record lifecycle orchestration
//!
//! The LifecycleManager is responsible for:
//! - Gating creation behind the per-user quota and tuple uniqueness
//! - Computing expiry timestamps (the validity window)
//! - Driving status transitions and renewal
//! - Surfacing the expiry sweep query
//!
//! ## Control flow
//!
//! ```text
//! create request ──▶ QuotaEnforcer ──▶ uniqueness check ──▶ RecordStore.create
//! update/renew  ─────────────────────────────────────────▶ RecordStore.update
//! ```
//!
//! Name/value validity is a precondition checked upstream via
//! [`crate::Validator`]; it is not re-verified here.
//!
//! ## Concurrency
//!
//! No locks are held across the quota → uniqueness → create sequence. Both
//! checks are advisory fast-path rejections; the store's own uniqueness
//! constraint is the authoritative defense. Expiration is detected lazily by
//! query predicate, never by a timer in this engine.

use chrono::{DateTime, Months, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::StarchartConfig;
use crate::error::Result;
use crate::quota::QuotaEnforcer;
use crate::record::{DnsRecord, DnsRecordPatch, ExpiredRecord, RecordId, RecordStatus, RecordTuple};
use crate::traits::{CreateRecord, RecordChanges, RecordStore};

/// Validity window added to "now" on creation, renewal, and activation
pub const VALIDITY_WINDOW_MONTHS: u32 = 6;

/// Compute the end of the validity window starting at `now`
pub fn expiry_from(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Months::new(VALIDITY_WINDOW_MONTHS)
}

/// Orchestrates create/update/renew/expire transitions for DNS records
///
/// The manager is stateless between calls and safe to share across tasks;
/// all persistent state lives behind the [`RecordStore`].
pub struct LifecycleManager {
    store: Arc<dyn RecordStore>,
    quota: QuotaEnforcer,
    config: StarchartConfig,
}

impl LifecycleManager {
    /// Create a lifecycle manager over the given store and configuration
    pub fn new(store: Arc<dyn RecordStore>, config: StarchartConfig) -> Result<Self> {
        config.validate()?;
        let quota = QuotaEnforcer::from_config(&config);
        Ok(Self {
            store,
            quota,
            config,
        })
    }

    /// The engine configuration
    pub fn config(&self) -> &StarchartConfig {
        &self.config
    }

    /// Create a record for the requesting user
    ///
    /// Checks the quota and tuple uniqueness, then persists the record as
    /// `pending` with `expires_at` set one validity window ahead.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::QuotaExceeded`]: the user owns too many records
    /// - [`crate::Error::DuplicateRecord`]: the tuple already exists
    /// - [`crate::Error::Persistence`]: the store returned no record
    pub async fn create(&self, request: RecordTuple) -> Result<RecordId> {
        self.quota.check(self.store.as_ref(), &request.username).await?;

        if self.store.count_by_tuple(&request).await? > 0 {
            return Err(crate::Error::duplicate_record(request.to_string()));
        }

        let expires_at = expiry_from(Utc::now());
        let fields = CreateRecord {
            username: request.username.clone(),
            record_type: request.record_type,
            subdomain: request.subdomain.clone(),
            value: request.value.clone(),
            status: RecordStatus::Pending,
            expires_at,
        };

        let record = self
            .store
            .create(fields)
            .await?
            .ok_or_else(|| crate::Error::persistence(format!("store refused {request}")))?;

        info!(
            id = record.id,
            username = %record.username,
            fqdn = %record.fqdn(&self.config.root_domain),
            %expires_at,
            "created DNS record"
        );
        Ok(record.id)
    }

    /// Apply a patch to an existing record
    ///
    /// A patch that sets `status = active` recomputes `expires_at` to one
    /// validity window ahead of now; every other patch leaves the expiry
    /// untouched.
    pub async fn update(&self, id: RecordId, patch: DnsRecordPatch) -> Result<DnsRecord> {
        let mut changes = match patch {
            DnsRecordPatch::Status { status } => RecordChanges {
                status: Some(status),
                ..RecordChanges::default()
            },
            DnsRecordPatch::Content {
                record_type,
                subdomain,
                value,
                description,
                course,
                ports,
                status,
            } => RecordChanges {
                record_type: Some(record_type),
                subdomain: Some(subdomain),
                value: Some(value),
                description,
                course,
                ports,
                status,
                expires_at: None,
            },
        };

        // Activation refreshes the validity window.
        if changes.status == Some(RecordStatus::Active) {
            changes.expires_at = Some(expiry_from(Utc::now()));
        }

        let record = self.store.update(id, changes).await?;
        debug!(id, status = ?record.status, "updated DNS record");
        Ok(record)
    }

    /// Reset a record's validity window, independent of its status
    pub async fn renew(&self, id: RecordId) -> Result<DnsRecord> {
        let expires_at = expiry_from(Utc::now());
        let record = self
            .store
            .update(
                id,
                RecordChanges {
                    expires_at: Some(expires_at),
                    ..RecordChanges::default()
                },
            )
            .await?;

        info!(id, %expires_at, "renewed DNS record");
        Ok(record)
    }

    /// Delete a record, returning it
    pub async fn delete(&self, id: RecordId) -> Result<DnsRecord> {
        let record = self.store.delete(id).await?;
        info!(id, username = %record.username, "deleted DNS record");
        Ok(record)
    }

    /// Look up a record by id
    pub async fn record(&self, id: RecordId) -> Result<Option<DnsRecord>> {
        self.store.find_by_id(id).await
    }

    /// All records owned by a user
    pub async fn records_for(&self, username: &str) -> Result<Vec<DnsRecord>> {
        self.store.find_by_username(username).await
    }

    /// All records strictly past their validity window, joined with owner
    /// information for the external sweep. Read-only; status is untouched.
    pub async fn list_expired(&self) -> Result<Vec<ExpiredRecord>> {
        self.store.find_expired(Utc::now()).await
    }
}
