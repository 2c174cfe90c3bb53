// # starchart-core
//
// Validation and lifecycle engine for self-service DNS record delegation.
//
// ## Architecture Overview
//
// Users request subdomains under their own scope (`<label>.<username>.<root-domain>`)
// pointing at IP addresses or hostnames. This crate owns the decision logic:
// - **Validator**: pure name/value admissibility checks
// - **QuotaEnforcer**: bounds records per user against a configured limit
// - **LifecycleManager**: create/update/renew/expire orchestration and the
//   validity-window computation
// - **RecordStore**: trait for the persistence collaborator; an in-memory
//   implementation ships for tests and embedding
//
// Persistence engines, the DNS provider integration (hosted zones), HTTP
// routing and auth are external collaborators of the surrounding service.
//
// ## Design Principles
//
// 1. **Separation of Concerns**: syntactic validation is separate from
//    lifecycle policy; validity is a precondition of `create`, not re-checked
// 2. **Injected Configuration**: root domain and quota limit are passed in
//    explicitly, never read ad hoc from process state
// 3. **Advisory Checks**: quota and uniqueness pre-checks are fast-path
//    rejections; the store's own constraints are authoritative
// 4. **Lazy Expiry**: "expired" is a query predicate over `expires_at`,
//    not a background timer

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod quota;
pub mod record;
pub mod store;
pub mod traits;
pub mod validate;

// Re-export core types for convenience
pub use config::StarchartConfig;
pub use error::{Error, Result};
pub use lifecycle::{LifecycleManager, VALIDITY_WINDOW_MONTHS, expiry_from};
pub use quota::QuotaEnforcer;
pub use record::{
    DnsRecord, DnsRecordPatch, ExpiredRecord, RecordId, RecordOwner, RecordStatus, RecordTuple,
    RecordType,
};
pub use store::MemoryRecordStore;
pub use traits::{CreateRecord, RecordChanges, RecordStore};
pub use validate::{Validator, is_value_valid};
