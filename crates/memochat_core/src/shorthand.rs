//! Shorthand prefix resolution for new messages.
//!
//! # Responsibility
//! - Map raw input text to a tag plus cleaned body using the registry's
//!   trigger keys.
//!
//! # Invariants
//! - Purely functional: no registry or store state is touched.
//! - First match in registry order wins; with the uniqueness invariant in
//!   force, at most one shortcut can match anyway.

use crate::model::message::TagRef;
use crate::model::shortcut::Shortcut;

/// Outcome of shorthand resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub tag: TagRef,
    pub text: String,
}

/// Resolves `raw` against the registered trigger keys.
///
/// The trimmed input matches a shortcut when its first character equals the
/// shortcut's one-character key (case-insensitively) and the second
/// character is a literal space; the two-character prefix is then stripped.
/// Shortcuts with an empty key never match. Without a match the full
/// trimmed text is tagged with the Default sentinel.
pub fn resolve(raw: &str, shortcuts: &[Shortcut]) -> Resolved {
    let trimmed = raw.trim();

    let mut chars = trimmed.chars();
    if let (Some(first), Some(' ')) = (chars.next(), chars.next()) {
        let first_lower = first.to_lowercase().to_string();
        for shortcut in shortcuts {
            if !shortcut.key.is_empty() && shortcut.key.to_lowercase() == first_lower {
                let body = &trimmed[first.len_utf8() + 1..];
                return Resolved {
                    tag: TagRef::Shortcut(shortcut.id),
                    text: body.to_string(),
                };
            }
        }
    }

    Resolved {
        tag: TagRef::Default,
        text: trimmed.to_string(),
    }
}
