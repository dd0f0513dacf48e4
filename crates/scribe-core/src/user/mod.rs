//! User domain: account records, the password-stripped session view, and the
//! user collection repository trait.

pub mod model;
pub mod repository;

pub use model::{User, UserView};
pub use repository::UserRepository;
