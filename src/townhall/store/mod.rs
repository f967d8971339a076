//! # Storage Layer
//!
//! Townhall persists a handful of JSON documents under string keys: the
//! seeded events board, submitted inquiries, newsletter subscriptions and the
//! contact form draft. The [`BlobStore`] trait is that key-value surface and
//! nothing more. It knows nothing about the shape of the values.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one `<key>.json` file per key inside the data
//!   directory, written atomically.
//! - [`memory::InMemoryStore`]: a `HashMap`, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── events.json          # { "seededOn": "2026-10-19", "items": [...] }
//! ├── inquiries.json       # [Inquiry, ...]
//! ├── subscriptions.json   # [Subscription, ...]
//! ├── contact_draft.json   # ContactDraft
//! └── config.json          # TownhallConfig (not a blob, see config.rs)
//! ```

use crate::error::{Result, TownhallError};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod fs;
pub mod memory;

pub const EVENTS_KEY: &str = "events";
pub const INQUIRIES_KEY: &str = "inquiries";
pub const SUBSCRIPTIONS_KEY: &str = "subscriptions";
pub const DRAFT_KEY: &str = "contact_draft";

/// String-keyed storage of serialized values.
pub trait BlobStore {
    /// Raw value for `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Keys double as file names, so they are kept to a safe alphabet.
pub fn check_key(key: &str) -> Result<()> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(TownhallError::Store(format!("Invalid store key: '{}'", key)))
    }
}

pub fn load_json<T: DeserializeOwned, S: BlobStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn save_json<T: Serialize, S: BlobStore + ?Sized>(
    store: &mut S,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string_pretty(value)?;
    store.set(key, &raw)
}

/// A stored list, or an empty one if the key is unset.
pub fn load_list<T: DeserializeOwned, S: BlobStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Vec<T>> {
    Ok(load_json(store, key)?.unwrap_or_default())
}
