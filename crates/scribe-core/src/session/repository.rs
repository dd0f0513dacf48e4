//! Session repository trait.
//!
//! A session is two persisted keys: a login flag and a password-stripped copy
//! of the signed-in user. The invariant is that they agree; a flag without a
//! stored user (or the reverse) reads as no session.

use crate::error::Result;
use crate::user::UserView;

/// An abstract repository for the persisted session state.
///
/// This decouples the session lifecycle from the storage mechanism. The
/// session never expires on its own; it exists from a successful login until
/// an explicit [`clear`](SessionRepository::clear).
pub trait SessionRepository: Send + Sync {
    /// Reads the persisted session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(view))`: a login flag and a stored user view that agree
    /// - `Ok(None)`: no session, or the two keys disagree
    /// - `Err(_)`: the stored value could not be read or parsed
    fn load(&self) -> Result<Option<UserView>>;

    /// Persists both session keys for the given user.
    fn save(&self, user: &UserView) -> Result<()>;

    /// Removes both session keys. Clearing an absent session succeeds.
    fn clear(&self) -> Result<()>;
}
