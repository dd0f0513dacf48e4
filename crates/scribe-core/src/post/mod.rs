//! Blog post domain: post records, drafts, the demo catalogue, and the post
//! collection repository trait.

pub mod model;
pub mod repository;
pub mod seed;

pub use model::{BlogPost, PostDraft, SYSTEM_AUTHOR};
pub use repository::PostRepository;
