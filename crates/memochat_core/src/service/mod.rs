//! Core use-case services.
//!
//! # Responsibility
//! - Keep the in-memory collections and mirror every mutation to the
//!   key-value adapter (write-through, memory first).
//! - Keep presentation layers decoupled from storage details.
//!
//! # Invariants
//! - Until `load()` has run, a collection is considered empty.
//! - Storage failures surface to the caller; the optimistic in-memory
//!   update is not rolled back, the next full load reconciles.

pub mod record_store;
pub mod shortcut_registry;
