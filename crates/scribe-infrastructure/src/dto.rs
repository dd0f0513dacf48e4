//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs pin the persisted JSON shapes. They are private to the
//! infrastructure layer: domain models use snake_case fields, while the wire
//! format uses camelCase (`authorId`, `createdAt`), and the conversion lives
//! here. The format is unversioned; persisted bytes are trusted to match
//! these shapes.

use scribe_core::post::BlogPost;
use scribe_core::user::{User, UserView};
use serde::{Deserialize, Serialize};

/// Persisted shape of one entry in the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            password: record.password,
        }
    }
}

/// Persisted shape of the `currentUser` value: a user without the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserViewRecord {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&UserView> for UserViewRecord {
    fn from(view: &UserView) -> Self {
        Self {
            id: view.id.clone(),
            name: view.name.clone(),
            email: view.email.clone(),
        }
    }
}

impl From<UserViewRecord> for UserView {
    fn from(record: UserViewRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
        }
    }
}

/// Persisted shape of one entry in the `blogs` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub author_id: String,
    pub created_at: String,
}

impl From<&BlogPost> for PostRecord {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            description: post.description.clone(),
            image: post.image.clone(),
            author_id: post.author_id.clone(),
            created_at: post.created_at.clone(),
        }
    }
}

impl From<PostRecord> for BlogPost {
    fn from(record: PostRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            image: record.image,
            author_id: record.author_id,
            created_at: record.created_at,
        }
    }
}
