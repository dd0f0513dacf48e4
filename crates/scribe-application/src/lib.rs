//! Application layer for Scribe.
//!
//! This crate provides the operations the UI layer calls: the session store
//! ([`AuthService`]) and the content store ([`BlogService`]), coordinating
//! domain rules with the storage-backed repositories.

pub mod auth_service;
pub mod blog_service;

pub use auth_service::AuthService;
pub use blog_service::BlogService;
