//! Key-value storage abstraction.
//!
//! The whole data layer sits on a string key-value store with three
//! operations. Collections are serialized as one value under one key and
//! rewritten wholesale on every mutation; the store owns the persisted bytes
//! and in-memory copies are disposable snapshots.
//!
//! # Known hazard
//!
//! Writes are last-write-wins with no locking or versioning. Two processes
//! sharing one storage location race: a write landing between another
//! process's read and write is silently discarded. This is an accepted
//! limitation of the data layer, not something implementations work around.

use crate::error::Result;

/// Well-known storage keys for the persisted state layout.
pub mod keys {
    /// Login flag: the string `true`, or absent.
    pub const LOGIN_FLAG: &str = "isLoggedIn";
    /// Current session user as a JSON object without the password field.
    pub const CURRENT_USER: &str = "currentUser";
    /// User collection as a JSON array.
    pub const USERS: &str = "users";
    /// Blog post collection as a JSON array.
    pub const POSTS: &str = "blogs";
}

/// An abstract string key-value store.
///
/// Implementations perform immediate synchronous reads and writes; there is
/// no batching and no transaction boundary beyond a single call.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the value stored under `key`, or `None` when the key is
    /// absent. Absence is not an error.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`. Removing an absent key
    /// succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}
