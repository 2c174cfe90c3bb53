//! Per-user record quota
//!
//! A best-effort gate: the count-then-create sequence is not atomic with
//! respect to concurrent requests from the same user, so the quota is not a
//! hard cap under concurrent load. Strict enforcement would need a
//! store-level counted insert.

use tracing::debug;

use crate::error::Result;
use crate::traits::RecordStore;

/// Bounds the number of records a single user may own
#[derive(Debug, Clone)]
pub struct QuotaEnforcer {
    limit: Option<u32>,
}

impl QuotaEnforcer {
    /// Create an enforcer with the given limit; `None` disables enforcement
    pub fn new(limit: Option<u32>) -> Self {
        Self { limit }
    }

    /// Create an enforcer from engine configuration
    pub fn from_config(config: &crate::StarchartConfig) -> Self {
        Self::new(config.user_record_limit)
    }

    /// The configured limit, if any
    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Check whether `username` may create another record
    ///
    /// With no configured limit this never fails and skips the store
    /// lookup entirely.
    pub async fn check(&self, store: &dyn RecordStore, username: &str) -> Result<()> {
        let Some(limit) = self.limit else {
            return Ok(());
        };

        let count = store.count_by_username(username).await?;
        debug!(%username, count, limit, "quota check");

        if count >= u64::from(limit) {
            return Err(crate::Error::quota_exceeded(username, limit));
        }

        Ok(())
    }
}
