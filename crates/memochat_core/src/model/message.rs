//! Message domain model.
//!
//! # Responsibility
//! - Define the persisted message record and its tag reference.
//! - Stamp creation time in the canonical `YYYY-MM-DD HH:MM:SS` format.
//!
//! # Invariants
//! - `id` is stable and never reused for another message.
//! - `time` is assigned at creation and never mutated afterwards.
//! - `shortcut_id` is either `TagRef::Default` or a shortcut uuid; the
//!   referenced shortcut may have been deleted since (dangling is allowed).

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a message record.
pub type MessageId = Uuid;

/// Creation timestamps use a lexicographically sortable local-time format.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// String form of the tag assigned to untagged messages.
pub const DEFAULT_TAG: &str = "Default";

/// Tag reference carried by every message.
///
/// Persisted as a plain string: `"Default"` for the sentinel, the uuid text
/// for a shortcut reference. Equality on the enum is what category filtering
/// uses, so an id that no longer resolves in the registry still matches
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TagRef {
    /// No shortcut prefix matched at creation time.
    Default,
    /// Reference to a shortcut by its generated id.
    Shortcut(Uuid),
}

impl From<TagRef> for String {
    fn from(value: TagRef) -> Self {
        match value {
            TagRef::Default => DEFAULT_TAG.to_string(),
            TagRef::Shortcut(id) => id.to_string(),
        }
    }
}

impl TryFrom<String> for TagRef {
    type Error = uuid::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == DEFAULT_TAG {
            return Ok(Self::Default);
        }
        Uuid::parse_str(&value).map(Self::Shortcut)
    }
}

/// Persisted message record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Stable global ID used for persistence keys and multi-select actions.
    pub id: MessageId,
    /// User-entered body after shorthand stripping.
    pub text: String,
    /// Local creation time, `YYYY-MM-DD HH:MM:SS`.
    pub time: String,
    /// Category tag resolved at creation or changed by a later edit.
    pub shortcut_id: TagRef,
}

impl Message {
    /// Creates a new message stamped with the current local time.
    pub fn new(text: impl Into<String>, shortcut_id: TagRef) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            text,
            Local::now().format(TIME_FORMAT).to_string(),
            shortcut_id,
        )
    }

    /// Creates a message with caller-provided identity and timestamp.
    ///
    /// Used by load and edit paths where both already exist.
    pub fn with_id(
        id: MessageId,
        text: impl Into<String>,
        time: impl Into<String>,
        shortcut_id: TagRef,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            time: time.into(),
            shortcut_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Message, TagRef};
    use uuid::Uuid;

    #[test]
    fn tag_ref_round_trips_through_string_form() {
        let id = Uuid::new_v4();
        assert_eq!(String::from(TagRef::Default), "Default");
        assert_eq!(String::from(TagRef::Shortcut(id)), id.to_string());
        assert_eq!(
            TagRef::try_from("Default".to_string()).unwrap(),
            TagRef::Default
        );
        assert_eq!(
            TagRef::try_from(id.to_string()).unwrap(),
            TagRef::Shortcut(id)
        );
    }

    #[test]
    fn tag_ref_rejects_non_uuid_text() {
        assert!(TagRef::try_from("not-a-uuid".to_string()).is_err());
    }

    #[test]
    fn message_json_uses_original_field_names() {
        let message = Message::with_id(
            Uuid::nil(),
            "hello",
            "2026-08-30 10:00:00",
            TagRef::Default,
        );
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["shortcutId"], "Default");
        assert_eq!(json["time"], "2026-08-30 10:00:00");
    }

    #[test]
    fn new_message_time_matches_canonical_format() {
        let message = Message::new("x", TagRef::Default);
        assert_eq!(message.time.len(), 19);
        assert_eq!(&message.time[4..5], "-");
        assert_eq!(&message.time[10..11], " ");
    }
}
