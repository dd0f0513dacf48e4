//! User domain models.

use serde::{Deserialize, Serialize};

/// A user account record as stored in the user collection.
///
/// The password is kept in plaintext, exactly as persisted; it never leaves
/// this type except through storage. Anything handed to the rest of the
/// application goes through [`UserView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Timestamp-derived identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Sign-in email; the only uniqueness constraint on the collection
    pub email: String,
    /// Plaintext password, compared byte-for-byte at login
    pub password: String,
}

impl User {
    /// Returns the password-stripped projection of this record.
    pub fn to_view(&self) -> UserView {
        UserView {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// The session-facing view of a user: everything except the password.
///
/// This is the shape persisted under the current-user key and the shape
/// returned to callers gating protected views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_view_strips_password() {
        let user = User {
            id: "1714564800000".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };

        let view = user.to_view();
        assert_eq!(view.id, user.id);
        assert_eq!(view.name, user.name);
        assert_eq!(view.email, user.email);

        // The view type has no password field; check the serialized shape too.
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("password").is_none());
    }
}
