//! Post collection repository trait.

use super::model::BlogPost;
use crate::error::Result;

/// An abstract repository for the persisted blog post collection.
///
/// Like the user collection, this is one ordered sequence under a single key
/// with whole-collection rewrite semantics. The distinction between an absent
/// collection and an empty one matters: seeding only happens when the key has
/// never been written.
pub trait PostRepository: Send + Sync {
    /// Loads the persisted collection.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(posts))`: the collection has been written at least once
    /// - `Ok(None)`: the collection key has never been written
    /// - `Err(_)`: the stored value could not be read or parsed
    fn load(&self) -> Result<Option<Vec<BlogPost>>>;

    /// Persists the whole collection, replacing whatever was stored.
    fn save(&self, posts: &[BlogPost]) -> Result<()>;
}
