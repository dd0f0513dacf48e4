pub mod config_storage;
pub mod dto;
pub mod json_post_repository;
pub mod json_session_repository;
pub mod json_user_repository;
pub mod paths;
pub mod storage;

pub use crate::config_storage::ConfigStorage;
pub use crate::json_post_repository::JsonPostRepository;
pub use crate::json_session_repository::JsonSessionRepository;
pub use crate::json_user_repository::JsonUserRepository;
pub use crate::storage::{DirStorage, MemoryStorage};
