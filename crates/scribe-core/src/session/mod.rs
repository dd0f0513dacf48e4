//! Session domain: persistence trait for the current authenticated identity.

pub mod repository;

pub use repository::SessionRepository;
