//! Session store: signup, login, logout, and the current session.

use chrono::Utc;
use scribe_core::error::{Result, ScribeError};
use scribe_core::ids::timestamp_id;
use scribe_core::session::SessionRepository;
use scribe_core::user::{User, UserRepository, UserView};
use std::sync::Arc;
use tracing::{debug, info};

/// The session store.
///
/// Holds the current authenticated identity as an explicit field rather than
/// ambient global state: construct one per process via [`AuthService::init`],
/// pass it to whichever components need gating, and tear the session down
/// with [`AuthService::logout`].
///
/// All credential checks are exact, case-sensitive plaintext comparisons
/// against the persisted user collection; this layer stores passwords as
/// given and never hands them out past [`UserView`].
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    session: Arc<dyn SessionRepository>,
    current: Option<UserView>,
}

impl AuthService {
    /// Creates the service, reading the persisted session once.
    ///
    /// This is the per-process-start session reconstruction: the persisted
    /// login flag and user view (when they agree) become the in-memory
    /// session; afterwards the field is only changed by `login`/`logout`.
    pub fn init(
        users: Arc<dyn UserRepository>,
        session: Arc<dyn SessionRepository>,
    ) -> Result<Self> {
        let current = session.load()?;
        match &current {
            Some(user) => debug!(user_id = %user.id, "session restored at startup"),
            None => debug!("no session at startup"),
        }
        Ok(Self {
            users,
            session,
            current,
        })
    }

    /// Returns the current session user, if any.
    ///
    /// Callers use this to gate protected views; `None` means
    /// unauthenticated.
    pub fn current_user(&self) -> Option<&UserView> {
        self.current.as_ref()
    }

    /// Registers a new user.
    ///
    /// Appends a record with a timestamp-derived id to the user collection.
    /// Does not log the new user in.
    ///
    /// # Errors
    ///
    /// [`ScribeError::AlreadyExists`] when a record with the same email is
    /// already in the collection (case-sensitive).
    pub fn signup(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let mut users = self.users.load()?.unwrap_or_default();

        if users.iter().any(|u| u.email == email) {
            return Err(ScribeError::already_exists("user", email));
        }

        let user = User {
            id: timestamp_id(Utc::now()),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        users.push(user.clone());
        self.users.save(&users)?;

        info!(user_id = %user.id, "user signed up");
        Ok(user)
    }

    /// Attempts to log in with the given credentials.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(view))`: both fields matched a record exactly; the session
    ///   is persisted and the password-stripped view returned
    /// - `Ok(None)`: no user collection yet, or no record matched
    pub fn login(&mut self, email: &str, password: &str) -> Result<Option<UserView>> {
        let Some(users) = self.users.load()? else {
            return Ok(None);
        };

        let Some(user) = users
            .iter()
            .find(|u| u.email == email && u.password == password)
        else {
            return Ok(None);
        };

        let view = user.to_view();
        self.session.save(&view)?;
        self.current = Some(view.clone());

        info!(user_id = %view.id, "user logged in");
        Ok(Some(view))
    }

    /// Ends the session: removes both persisted session keys and clears the
    /// in-memory identity. Logging out without a session succeeds.
    pub fn logout(&mut self) -> Result<()> {
        self.session.clear()?;
        self.current = None;
        info!("user logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::storage::{KeyValueStorage, keys};
    use scribe_infrastructure::storage::MemoryStorage;
    use scribe_infrastructure::{JsonSessionRepository, JsonUserRepository};

    fn service_with_storage() -> (Arc<MemoryStorage>, AuthService) {
        let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());
        let service = AuthService::init(
            Arc::new(JsonUserRepository::new(storage.clone())),
            Arc::new(JsonSessionRepository::new(storage.clone())),
        )
        .unwrap();
        (storage, service)
    }

    #[test]
    fn test_signup_then_login_returns_view_without_password() {
        let (_storage, mut service) = service_with_storage();
        let user = service.signup("Ada", "ada@example.com", "pw").unwrap();

        let view = service.login("ada@example.com", "pw").unwrap().unwrap();
        assert_eq!(view, user.to_view());
        assert_eq!(service.current_user(), Some(&view));
    }

    #[test]
    fn test_signup_does_not_log_in() {
        let (_storage, service) = service_with_storage();
        service.signup("Ada", "ada@example.com", "pw").unwrap();
        assert_eq!(service.current_user(), None);
    }

    #[test]
    fn test_login_with_no_user_collection_fails() {
        let (_storage, mut service) = service_with_storage();
        assert_eq!(service.login("ada@example.com", "pw").unwrap(), None);
    }

    #[test]
    fn test_login_requires_exact_match() {
        let (_storage, mut service) = service_with_storage();
        service.signup("Ada", "ada@example.com", "pw").unwrap();

        assert_eq!(service.login("ada@example.com", "wrong").unwrap(), None);
        assert_eq!(service.login("Ada@example.com", "pw").unwrap(), None);
        assert_eq!(service.current_user(), None);
    }

    #[test]
    fn test_duplicate_email_rejected_and_collection_unchanged() {
        let (storage, service) = service_with_storage();
        service.signup("Ada", "ada@example.com", "pw").unwrap();
        let before = storage.get(keys::USERS).unwrap();

        let err = service.signup("Other", "ada@example.com", "pw2").unwrap_err();
        assert!(err.is_already_exists());

        assert_eq!(storage.get(keys::USERS).unwrap(), before);
    }

    #[test]
    fn test_logout_clears_persisted_keys_and_memory() {
        let (storage, mut service) = service_with_storage();
        service.signup("Ada", "ada@example.com", "pw").unwrap();
        service.login("ada@example.com", "pw").unwrap();

        service.logout().unwrap();
        assert_eq!(service.current_user(), None);
        assert_eq!(storage.get(keys::LOGIN_FLAG).unwrap(), None);
        assert_eq!(storage.get(keys::CURRENT_USER).unwrap(), None);

        // Logging out again is fine.
        service.logout().unwrap();
    }

    #[test]
    fn test_init_restores_persisted_session() {
        let (storage, mut service) = service_with_storage();
        service.signup("Ada", "ada@example.com", "pw").unwrap();
        let view = service.login("ada@example.com", "pw").unwrap().unwrap();

        // A fresh service over the same storage sees the session.
        let restored = AuthService::init(
            Arc::new(JsonUserRepository::new(storage.clone())),
            Arc::new(JsonSessionRepository::new(storage.clone())),
        )
        .unwrap();
        assert_eq!(restored.current_user(), Some(&view));
    }

    #[test]
    fn test_init_treats_flag_without_user_as_absent() {
        let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());
        storage.set(keys::LOGIN_FLAG, "true").unwrap();

        let service = AuthService::init(
            Arc::new(JsonUserRepository::new(storage.clone())),
            Arc::new(JsonSessionRepository::new(storage.clone())),
        )
        .unwrap();
        assert_eq!(service.current_user(), None);
    }
}
