//! Repository trait re-exports.
//!
//! This module provides centralized access to all repository traits.

pub use crate::post::PostRepository;
pub use crate::session::SessionRepository;
pub use crate::user::UserRepository;
