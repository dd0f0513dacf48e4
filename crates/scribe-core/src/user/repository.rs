//! User collection repository trait.

use super::model::User;
use crate::error::Result;

/// An abstract repository for the persisted user collection.
///
/// The collection is one ordered sequence stored under a single key; every
/// mutation is a whole-collection rewrite. Implementations decide the storage
/// mechanism (file-backed store, in-memory store).
pub trait UserRepository: Send + Sync {
    /// Loads the persisted collection.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(users))`: the collection has been written at least once
    /// - `Ok(None)`: the collection key has never been written
    /// - `Err(_)`: the stored value could not be read or parsed
    fn load(&self) -> Result<Option<Vec<User>>>;

    /// Persists the whole collection, replacing whatever was stored.
    fn save(&self, users: &[User]) -> Result<()>;
}
