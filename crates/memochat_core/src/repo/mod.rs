//! Persistence adapter layer.
//!
//! # Responsibility
//! - Define the key-value contract the in-memory collections write through.
//! - Isolate SQLite details from registry/store orchestration.
//!
//! # Invariants
//! - Keys are namespaced by collection prefix (`message:`, `shortcut:`).
//! - Bulk operations are best-effort; no cross-key atomicity is promised.

pub mod kv;
