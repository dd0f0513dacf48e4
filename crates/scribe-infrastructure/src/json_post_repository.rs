//! JSON post repository over key-value storage.

use crate::dto::PostRecord;
use scribe_core::error::Result;
use scribe_core::post::{BlogPost, PostRepository};
use scribe_core::storage::{KeyValueStorage, keys};
use std::sync::Arc;
use tracing::debug;

/// A [`PostRepository`] keeping the whole post collection as one JSON array
/// under the `blogs` key.
pub struct JsonPostRepository {
    storage: Arc<dyn KeyValueStorage>,
}

impl JsonPostRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

impl PostRepository for JsonPostRepository {
    fn load(&self) -> Result<Option<Vec<BlogPost>>> {
        let Some(raw) = self.storage.get(keys::POSTS)? else {
            return Ok(None);
        };
        let records: Vec<PostRecord> = serde_json::from_str(&raw)?;
        debug!(count = records.len(), "loaded post collection");
        Ok(Some(records.into_iter().map(BlogPost::from).collect()))
    }

    fn save(&self, posts: &[BlogPost]) -> Result<()> {
        let records: Vec<PostRecord> = posts.iter().map(PostRecord::from).collect();
        let raw = serde_json::to_string(&records)?;
        self.storage.set(keys::POSTS, &raw)?;
        debug!(count = posts.len(), "saved post collection");
        Ok(())
    }
}
