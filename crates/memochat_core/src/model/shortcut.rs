//! Shortcut (tag) domain model and field validation.
//!
//! # Responsibility
//! - Define the persisted shortcut record and its add/edit inputs.
//! - Validate field format and cross-record uniqueness against a registry
//!   snapshot, reporting failures per field.
//!
//! # Invariants
//! - `key` is empty or exactly one character.
//! - `name` is non-empty; `icon` belongs to the closed icon vocabulary.
//! - `key`, `name` and `icon` are each unique across all other shortcuts.

use crate::icons::is_valid_icon;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a shortcut record.
pub type ShortcutId = Uuid;

/// Persisted shortcut record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// Stable global ID; also the persistence key suffix.
    pub id: ShortcutId,
    /// One-character shorthand trigger, or empty when none is assigned.
    pub key: String,
    /// Display name shown in pickers and bubbles.
    pub name: String,
    /// Icon identifier from the closed vocabulary.
    pub icon: String,
}

/// User-editable fields of a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutField {
    Key,
    Name,
    Icon,
}

impl Display for ShortcutField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key => write!(f, "key"),
            Self::Name => write!(f, "name"),
            Self::Icon => write!(f, "icon"),
        }
    }
}

/// Rule a field failed during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Value must not be empty.
    Empty,
    /// Value exceeds the allowed character count.
    TooLong { max: usize },
    /// Icon name is outside the known vocabulary.
    UnknownIcon,
    /// Another shortcut already uses this value.
    Duplicate,
}

/// One field-level validation failure: which field broke which rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: ShortcutField,
    pub rule: FieldRule,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.rule {
            FieldRule::Empty => write!(f, "{} must not be empty", self.field),
            FieldRule::TooLong { max } => {
                write!(f, "{} must be at most {max} character(s)", self.field)
            }
            FieldRule::UnknownIcon => write!(f, "icon is not a known icon name"),
            FieldRule::Duplicate => {
                write!(f, "{} is already used by another shortcut", self.field)
            }
        }
    }
}

impl Error for FieldError {}

/// Candidate shortcut from the add form, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutDraft {
    pub key: String,
    pub name: String,
    pub icon: String,
}

/// Single-field change from the inline edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutChange {
    Key(String),
    Name(String),
    Icon(String),
}

impl ShortcutChange {
    /// The field this change targets.
    pub fn field(&self) -> ShortcutField {
        match self {
            Self::Key(_) => ShortcutField::Key,
            Self::Name(_) => ShortcutField::Name,
            Self::Icon(_) => ShortcutField::Icon,
        }
    }
}

impl Shortcut {
    /// Creates a shortcut from a validated draft with a fresh id.
    pub fn from_draft(draft: ShortcutDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            key: draft.key,
            name: draft.name,
            icon: draft.icon,
        }
    }

    /// Applies a single-field change in place.
    pub fn apply(&mut self, change: ShortcutChange) {
        match change {
            ShortcutChange::Key(value) => self.key = value,
            ShortcutChange::Name(value) => self.name = value,
            ShortcutChange::Icon(value) => self.icon = value,
        }
    }
}

/// Validates a full draft against the current registry snapshot.
///
/// Returns every failure found; an empty vector means the draft is
/// acceptable. The snapshot must not contain the draft itself.
pub fn validate_draft(draft: &ShortcutDraft, existing: &[Shortcut]) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_key_format(&draft.key, &mut errors);
    check_name_format(&draft.name, &mut errors);
    check_icon_format(&draft.icon, &mut errors);
    check_unique(ShortcutField::Key, &draft.key, existing, None, &mut errors);
    check_unique(ShortcutField::Name, &draft.name, existing, None, &mut errors);
    check_unique(ShortcutField::Icon, &draft.icon, existing, None, &mut errors);
    errors
}

/// Validates one changed field against the snapshot, excluding the record
/// being edited from the uniqueness scan.
pub fn validate_change(
    change: &ShortcutChange,
    existing: &[Shortcut],
    exclude: ShortcutId,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    match change {
        ShortcutChange::Key(value) => {
            check_key_format(value, &mut errors);
            check_unique(ShortcutField::Key, value, existing, Some(exclude), &mut errors);
        }
        ShortcutChange::Name(value) => {
            check_name_format(value, &mut errors);
            check_unique(ShortcutField::Name, value, existing, Some(exclude), &mut errors);
        }
        ShortcutChange::Icon(value) => {
            check_icon_format(value, &mut errors);
            check_unique(ShortcutField::Icon, value, existing, Some(exclude), &mut errors);
        }
    }
    errors
}

fn check_key_format(key: &str, errors: &mut Vec<FieldError>) {
    if key.chars().count() > 1 {
        errors.push(FieldError {
            field: ShortcutField::Key,
            rule: FieldRule::TooLong { max: 1 },
        });
    }
}

fn check_name_format(name: &str, errors: &mut Vec<FieldError>) {
    if name.is_empty() {
        errors.push(FieldError {
            field: ShortcutField::Name,
            rule: FieldRule::Empty,
        });
    }
}

fn check_icon_format(icon: &str, errors: &mut Vec<FieldError>) {
    if icon.is_empty() {
        errors.push(FieldError {
            field: ShortcutField::Icon,
            rule: FieldRule::Empty,
        });
    } else if !is_valid_icon(icon) {
        errors.push(FieldError {
            field: ShortcutField::Icon,
            rule: FieldRule::UnknownIcon,
        });
    }
}

fn check_unique(
    field: ShortcutField,
    value: &str,
    existing: &[Shortcut],
    exclude: Option<ShortcutId>,
    errors: &mut Vec<FieldError>,
) {
    let clash = existing
        .iter()
        .filter(|shortcut| Some(shortcut.id) != exclude)
        .any(|shortcut| match field {
            ShortcutField::Key => shortcut.key == value,
            ShortcutField::Name => shortcut.name == value,
            ShortcutField::Icon => shortcut.icon == value,
        });
    if clash {
        errors.push(FieldError {
            field,
            rule: FieldRule::Duplicate,
        });
    }
}
