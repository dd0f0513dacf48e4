//! JSON user repository over key-value storage.

use crate::dto::UserRecord;
use scribe_core::error::Result;
use scribe_core::storage::{KeyValueStorage, keys};
use scribe_core::user::{User, UserRepository};
use std::sync::Arc;
use tracing::debug;

/// A [`UserRepository`] keeping the whole user collection as one JSON array
/// under the `users` key.
pub struct JsonUserRepository {
    storage: Arc<dyn KeyValueStorage>,
}

impl JsonUserRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

impl UserRepository for JsonUserRepository {
    fn load(&self) -> Result<Option<Vec<User>>> {
        let Some(raw) = self.storage.get(keys::USERS)? else {
            return Ok(None);
        };
        let records: Vec<UserRecord> = serde_json::from_str(&raw)?;
        debug!(count = records.len(), "loaded user collection");
        Ok(Some(records.into_iter().map(User::from).collect()))
    }

    fn save(&self, users: &[User]) -> Result<()> {
        let records: Vec<UserRecord> = users.iter().map(UserRecord::from).collect();
        let raw = serde_json::to_string(&records)?;
        self.storage.set(keys::USERS, &raw)?;
        debug!(count = users.len(), "saved user collection");
        Ok(())
    }
}
