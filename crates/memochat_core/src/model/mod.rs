//! Domain model for messages, shortcut tags and filter criteria.
//!
//! # Responsibility
//! - Define the canonical records persisted by the record store and the
//!   shortcut registry.
//! - Keep validation rules for shortcut fields next to the data they guard.
//!
//! # Invariants
//! - Every message and shortcut is identified by a stable uuid.
//! - A message's tag is either the `Default` sentinel or a shortcut id;
//!   dangling ids are tolerated (registry entries may be deleted later).

pub mod filter;
pub mod message;
pub mod shortcut;
