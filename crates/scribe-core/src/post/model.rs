//! Blog post domain models.

use serde::{Deserialize, Serialize};

/// Sentinel author id marking seed/demo content.
///
/// Posts authored by `"system"` are editable and deletable by any
/// authenticated user.
pub const SYSTEM_AUTHOR: &str = "system";

/// A blog post record as stored in the post collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Timestamp-derived identifier
    pub id: String,
    pub title: String,
    /// Post body; may carry lightweight inline markup, treated as opaque text
    pub description: String,
    /// Cover image as an opaque string (URL or data URI)
    pub image: String,
    /// Creating user's id, or [`SYSTEM_AUTHOR`] for demo content
    pub author_id: String,
    /// RFC 3339 UTC creation timestamp; drives newest-first ordering
    pub created_at: String,
}

impl BlogPost {
    /// Whether a user may edit or delete this post: the author themselves,
    /// or anyone when the post is demo content.
    pub fn editable_by(&self, user_id: &str) -> bool {
        self.author_id == user_id || self.author_id == SYSTEM_AUTHOR
    }
}

/// The mutable fields of a post, as entered by a user.
///
/// Used both when creating a post and when editing one; `id`, `author_id`,
/// and `created_at` are never part of a draft.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    /// Opaque image string; an empty string means no cover image
    pub image: String,
}
