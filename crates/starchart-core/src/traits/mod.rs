//! Core traits for the record engine
//!
//! - [`RecordStore`]: abstract persistence capability for DNS records

pub mod record_store;

pub use record_store::{CreateRecord, RecordChanges, RecordStore};
