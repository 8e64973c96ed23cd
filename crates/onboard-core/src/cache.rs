//! Local draft cache layered over a key/value storage primitive.

use std::cell::RefCell;
use std::collections::BTreeMap;

use onboard_domain::ProfileDraft;
use tracing::{debug, info, warn};

use crate::CoreError;

/// Minimal local-storage contract: string values addressed by string keys.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn remove_item(&self, key: &str) -> Result<(), CoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), CoreError> {
        (**self).remove_item(key)
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), CoreError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Durable mirror of the in-progress draft.
pub trait DraftCache {
    /// Reads the stored draft. Unreadable or malformed entries yield `None`.
    fn load(&self) -> Option<ProfileDraft>;

    /// Overwrites any previously stored draft.
    fn save(&self, draft: &ProfileDraft) -> Result<(), CoreError>;

    /// Removes the stored draft.
    fn clear(&self) -> Result<(), CoreError>;
}

impl<T: DraftCache + ?Sized> DraftCache for &T {
    fn load(&self) -> Option<ProfileDraft> {
        (**self).load()
    }

    fn save(&self, draft: &ProfileDraft) -> Result<(), CoreError> {
        (**self).save(draft)
    }

    fn clear(&self) -> Result<(), CoreError> {
        (**self).clear()
    }
}

/// Stores the draft as one JSON value under a single key.
#[derive(Debug)]
pub struct LocalDraftCache<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> LocalDraftCache<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    fn discard(&self) {
        if let Err(err) = self.store.remove_item(&self.key) {
            warn!(key = %self.key, error = %err, "Failed to discard malformed draft");
        }
    }
}

impl<S: KeyValueStore> DraftCache for LocalDraftCache<S> {
    fn load(&self) -> Option<ProfileDraft> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key = %self.key, error = %err, "Failed to read cached draft");
                return None;
            }
        };
        match serde_json::from_str::<ProfileDraft>(&raw) {
            Ok(draft) => {
                info!(key = %self.key, "Loaded cached onboarding draft");
                Some(draft)
            }
            Err(err) => {
                debug!(key = %self.key, error = %err, "Discarding malformed cached draft");
                self.discard();
                None
            }
        }
    }

    fn save(&self, draft: &ProfileDraft) -> Result<(), CoreError> {
        let json = serde_json::to_string(draft)?;
        self.store.set_item(&self.key, &json)
    }

    fn clear(&self) -> Result<(), CoreError> {
        self.store.remove_item(&self.key)
    }
}
