//! Record store: the ordered message collection over the KV adapter.
//!
//! # Responsibility
//! - Own the in-memory message list in arrival order (oldest first).
//! - Mirror append/edit/delete to the `message:` namespace write-through.
//!
//! # Invariants
//! - A message's `id` and `time` never change after creation; edits replace
//!   `text`/`shortcut_id` only.
//! - A corrupt persisted record is skipped on load, never fatal.

use crate::model::message::{Message, MessageId};
use crate::repo::kv::{KvError, KvStore, MESSAGE_PREFIX};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error raised by record store mutations.
#[derive(Debug)]
pub enum StoreError {
    /// No message with this id is loaded.
    NotFound(MessageId),
    /// The record could not be serialized for persistence.
    Serialize(serde_json::Error),
    /// The persisted write failed after the in-memory update.
    Storage(KvError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "message not found: {id}"),
            Self::Serialize(err) => write!(f, "failed to serialize message: {err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Serialize(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Storage(value)
    }
}

/// In-memory message collection backed write-through by a key-value store.
pub struct RecordStore<S: KvStore> {
    store: S,
    messages: Vec<Message>,
}

impl<S: KvStore> RecordStore<S> {
    /// Creates an empty store over the given adapter. Call [`load`] before
    /// reading.
    ///
    /// [`load`]: Self::load
    pub fn new(store: S) -> Self {
        Self {
            store,
            messages: Vec::new(),
        }
    }

    /// Scans the `message:` namespace and rebuilds the in-memory list.
    ///
    /// KV enumeration is key-ordered and uuid keys carry no arrival
    /// information, so loaded records are re-sorted by `(time, id)` to
    /// restore oldest-first order. Unparseable records are skipped with a
    /// warning.
    pub fn load(&mut self) -> Result<(), KvError> {
        let entries = self.store.get_by_prefix(MESSAGE_PREFIX)?;
        let total = entries.len();
        self.messages.clear();
        for (key, value) in entries {
            match serde_json::from_str::<Message>(&value) {
                Ok(message) => self.messages.push(message),
                Err(err) => {
                    warn!("event=message_load module=store status=skip key={key} error={err}")
                }
            }
        }
        self.messages
            .sort_by(|a, b| a.time.cmp(&b.time).then_with(|| a.id.cmp(&b.id)));
        info!(
            "event=message_load module=store status=ok loaded={} skipped={}",
            self.messages.len(),
            total - self.messages.len()
        );
        Ok(())
    }

    /// Appends a message and persists it.
    ///
    /// Memory is updated first; a storage error is surfaced without rolling
    /// the append back.
    pub fn add(&mut self, message: Message) -> Result<(), StoreError> {
        self.messages.push(message.clone());
        self.persist(&message)?;
        info!("event=message_add module=store status=ok id={}", message.id);
        Ok(())
    }

    /// Replaces the text/tag of an existing message.
    ///
    /// The stored `time` is authoritative: whatever timestamp `update`
    /// carries is discarded, so an edit can never move a message in the
    /// timeline. Persistence removes the old key and re-puts under the same
    /// id, matching the delete-then-reinsert contract.
    pub fn edit(&mut self, update: Message) -> Result<Message, StoreError> {
        let index = self
            .messages
            .iter()
            .position(|message| message.id == update.id)
            .ok_or(StoreError::NotFound(update.id))?;

        let edited = Message::with_id(
            update.id,
            update.text,
            self.messages[index].time.clone(),
            update.shortcut_id,
        );
        self.messages[index] = edited.clone();

        // Not a transactional update: a crash between remove and put loses
        // the record until the caller re-creates it.
        let key = storage_key(edited.id);
        self.store.multi_remove(std::slice::from_ref(&key))?;
        self.persist(&edited)?;
        info!("event=message_edit module=store status=ok id={}", edited.id);
        Ok(edited)
    }

    /// Removes the given messages from memory and storage.
    ///
    /// Unknown ids are ignored; used by the multi-select delete action.
    pub fn delete(&mut self, ids: &[MessageId]) -> Result<(), StoreError> {
        self.messages.retain(|message| !ids.contains(&message.id));
        let keys: Vec<String> = ids.iter().map(|id| storage_key(*id)).collect();
        self.store.multi_remove(&keys)?;
        info!(
            "event=message_delete module=store status=ok count={}",
            ids.len()
        );
        Ok(())
    }

    /// Current snapshot in arrival order, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    fn persist(&self, message: &Message) -> Result<(), StoreError> {
        let payload = serde_json::to_string(message).map_err(StoreError::Serialize)?;
        self.store.put(&storage_key(message.id), &payload)?;
        Ok(())
    }
}

fn storage_key(id: MessageId) -> String {
    format!("{MESSAGE_PREFIX}{id}")
}
