//! Shortcut registry: validated tag definitions over the KV adapter.
//!
//! # Responsibility
//! - Own the in-memory shortcut set in insertion order.
//! - Enforce field format and key/name/icon uniqueness on add and edit.
//! - Mirror every successful mutation to persistence.
//!
//! # Invariants
//! - After any sequence of individually successful add/edit calls, no two
//!   shortcuts share a key, name or icon.
//! - A corrupt persisted record is skipped on load, never fatal.
//! - Deleting a shortcut does not cascade to messages referencing it.

use crate::model::shortcut::{
    validate_change, validate_draft, FieldError, Shortcut, ShortcutChange, ShortcutDraft,
    ShortcutId,
};
use crate::repo::kv::{KvError, KvStore, SHORTCUT_PREFIX};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error raised by registry mutations.
#[derive(Debug)]
pub enum RegistryError {
    /// One or more fields failed validation; state is unchanged.
    Validation(Vec<FieldError>),
    /// No shortcut with this id is registered.
    NotFound(ShortcutId),
    /// The record could not be serialized for persistence.
    Serialize(serde_json::Error),
    /// The persisted write failed after the in-memory update.
    Storage(KvError),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => {
                write!(f, "shortcut validation failed:")?;
                for error in errors {
                    write!(f, " {error};")?;
                }
                Ok(())
            }
            Self::NotFound(id) => write!(f, "shortcut not found: {id}"),
            Self::Serialize(err) => write!(f, "failed to serialize shortcut: {err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<KvError> for RegistryError {
    fn from(value: KvError) -> Self {
        Self::Storage(value)
    }
}

/// In-memory shortcut set backed write-through by a key-value store.
pub struct ShortcutRegistry<S: KvStore> {
    store: S,
    shortcuts: Vec<Shortcut>,
}

impl<S: KvStore> ShortcutRegistry<S> {
    /// Creates an empty registry over the given adapter. Call [`load`]
    /// before reading.
    ///
    /// [`load`]: Self::load
    pub fn new(store: S) -> Self {
        Self {
            store,
            shortcuts: Vec::new(),
        }
    }

    /// Scans the `shortcut:` namespace and rebuilds the in-memory set.
    ///
    /// Unparseable records are skipped with a warning; the payload carries
    /// its own id, so rows written under the historical trigger-key scheme
    /// load the same as id-keyed ones.
    pub fn load(&mut self) -> Result<(), KvError> {
        let entries = self.store.get_by_prefix(SHORTCUT_PREFIX)?;
        let total = entries.len();
        self.shortcuts.clear();
        for (key, value) in entries {
            match serde_json::from_str::<Shortcut>(&value) {
                Ok(shortcut) => self.shortcuts.push(shortcut),
                Err(err) => warn!(
                    "event=shortcut_load module=registry status=skip key={key} error={err}"
                ),
            }
        }
        info!(
            "event=shortcut_load module=registry status=ok loaded={} skipped={}",
            self.shortcuts.len(),
            total - self.shortcuts.len()
        );
        Ok(())
    }

    /// Validates and registers a new shortcut.
    ///
    /// On validation failure neither memory nor storage changes. On success
    /// memory is updated first, then the record is persisted; a storage
    /// error is surfaced without rolling the in-memory insert back.
    pub fn add(&mut self, draft: ShortcutDraft) -> Result<Shortcut, RegistryError> {
        let errors = validate_draft(&draft, &self.shortcuts);
        if !errors.is_empty() {
            return Err(RegistryError::Validation(errors));
        }

        let shortcut = Shortcut::from_draft(draft);
        self.shortcuts.push(shortcut.clone());
        self.persist(&shortcut)?;
        info!(
            "event=shortcut_add module=registry status=ok id={}",
            shortcut.id
        );
        Ok(shortcut)
    }

    /// Applies a single-field edit to an existing shortcut.
    ///
    /// Only the changed field is re-validated, with the edited record
    /// excluded from the uniqueness scan. The full updated record is
    /// persisted.
    pub fn edit(
        &mut self,
        id: ShortcutId,
        change: ShortcutChange,
    ) -> Result<Shortcut, RegistryError> {
        let index = self
            .shortcuts
            .iter()
            .position(|shortcut| shortcut.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        let errors = validate_change(&change, &self.shortcuts, id);
        if !errors.is_empty() {
            return Err(RegistryError::Validation(errors));
        }

        self.shortcuts[index].apply(change);
        let updated = self.shortcuts[index].clone();
        self.persist(&updated)?;
        info!("event=shortcut_edit module=registry status=ok id={id}");
        Ok(updated)
    }

    /// Removes the given shortcuts from memory and storage.
    ///
    /// Unknown ids are ignored. Messages referencing a removed id keep it
    /// as a dangling reference.
    pub fn delete(&mut self, ids: &[ShortcutId]) -> Result<(), RegistryError> {
        self.shortcuts.retain(|shortcut| !ids.contains(&shortcut.id));
        let keys: Vec<String> = ids.iter().map(|id| storage_key(*id)).collect();
        self.store.multi_remove(&keys)?;
        info!(
            "event=shortcut_delete module=registry status=ok count={}",
            ids.len()
        );
        Ok(())
    }

    /// Current registry snapshot in insertion order.
    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    fn persist(&self, shortcut: &Shortcut) -> Result<(), RegistryError> {
        let payload = serde_json::to_string(shortcut).map_err(RegistryError::Serialize)?;
        self.store.put(&storage_key(shortcut.id), &payload)?;
        Ok(())
    }
}

fn storage_key(id: ShortcutId) -> String {
    format!("{SHORTCUT_PREFIX}{id}")
}
