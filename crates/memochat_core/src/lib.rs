//! Core domain logic for memochat.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod filter;
pub mod icons;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod shorthand;

pub use filter::engine::{contains_link, filter_messages};
pub use icons::{is_valid_icon, suggest_icons, ICON_NAMES};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::filter::{CategoryFilter, DateRange, FilterSpec};
pub use model::message::{Message, MessageId, TagRef};
pub use model::shortcut::{
    FieldError, FieldRule, Shortcut, ShortcutChange, ShortcutDraft, ShortcutField, ShortcutId,
};
pub use repo::kv::{KvError, KvResult, KvStore, SqliteKvStore, MESSAGE_PREFIX, SHORTCUT_PREFIX};
pub use service::record_store::{RecordStore, StoreError};
pub use service::shortcut_registry::{RegistryError, ShortcutRegistry};
pub use shorthand::{resolve, Resolved};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
