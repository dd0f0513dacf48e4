//! JSON session repository over key-value storage.
//!
//! The session is two keys: the login flag (`isLoggedIn`) and the stored
//! user view (`currentUser`). They are written and removed together; on read
//! they must agree or the session counts as absent.

use crate::dto::UserViewRecord;
use scribe_core::error::Result;
use scribe_core::session::SessionRepository;
use scribe_core::storage::{KeyValueStorage, keys};
use scribe_core::user::UserView;
use std::sync::Arc;
use tracing::{debug, warn};

/// Value stored under the login flag key when a session exists.
const LOGGED_IN: &str = "true";

/// A [`SessionRepository`] over the two well-known session keys.
pub struct JsonSessionRepository {
    storage: Arc<dyn KeyValueStorage>,
}

impl JsonSessionRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

impl SessionRepository for JsonSessionRepository {
    fn load(&self) -> Result<Option<UserView>> {
        match self.storage.get(keys::LOGIN_FLAG)? {
            Some(flag) if flag == LOGGED_IN => {}
            _ => return Ok(None),
        }

        let Some(raw) = self.storage.get(keys::CURRENT_USER)? else {
            // Flag without a stored user: the keys disagree, treat the
            // session as absent.
            warn!("login flag set but no current user stored");
            return Ok(None);
        };

        let record: UserViewRecord = serde_json::from_str(&raw)?;
        debug!(user_id = %record.id, "restored session");
        Ok(Some(record.into()))
    }

    fn save(&self, user: &UserView) -> Result<()> {
        let raw = serde_json::to_string(&UserViewRecord::from(user))?;
        self.storage.set(keys::LOGIN_FLAG, LOGGED_IN)?;
        self.storage.set(keys::CURRENT_USER, &raw)?;
        debug!(user_id = %user.id, "saved session");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.storage.remove(keys::LOGIN_FLAG)?;
        self.storage.remove(keys::CURRENT_USER)?;
        debug!("cleared session");
        Ok(())
    }
}
