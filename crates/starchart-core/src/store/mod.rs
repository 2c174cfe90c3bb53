//! Record store implementations
//!
//! The engine only depends on the [`crate::traits::RecordStore`] trait;
//! this module ships the in-memory implementation used for tests and
//! embedded deployments. Database-backed stores live in the surrounding
//! service.

pub mod memory;

pub use memory::MemoryRecordStore;
