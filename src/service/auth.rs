//! Login session

use super::crypto::verify_password;
use super::errors::ServiceResult;
use super::users::UserService;
use crate::model::{User, UserRole};
use crate::observability::{log_event_with_fields, Event};

/// Tracks the logged-in user for one session.
///
/// One instance per session; nothing is kept in global state.
pub struct AuthService<'a> {
    users: &'a UserService,
    logged_user: Option<User>,
}

impl<'a> AuthService<'a> {
    pub fn new(users: &'a UserService) -> Self {
        Self {
            users,
            logged_user: None,
        }
    }

    /// Checks credentials and remembers the user on success.
    ///
    /// Returns `Ok(false)` on a wrong password and `NotFound` for an
    /// unknown email.
    pub fn login(&mut self, email: &str, password: &str) -> ServiceResult<bool> {
        let user = self.users.find_user(email)?;

        let verified = user
            .password_hash
            .as_deref()
            .is_some_and(|hash| verify_password(password, hash));

        if verified {
            let id = user.id.map(|id| id.to_string()).unwrap_or_default();
            log_event_with_fields(Event::LoginSucceeded, &[("id", id.as_str())]);
            self.logged_user = Some(user);
        } else {
            log_event_with_fields(Event::LoginFailed, &[("email", email)]);
        }

        Ok(verified)
    }

    /// Forgets the logged-in user.
    pub fn logout(&mut self) {
        self.logged_user = None;
    }

    /// The currently logged-in user, if any.
    pub fn logged_user(&self) -> Option<&User> {
        self.logged_user.as_ref()
    }

    /// Whether the logged-in user is a manager.
    pub fn is_manager(&self) -> bool {
        self.logged_user
            .as_ref()
            .is_some_and(|u| u.role == Some(UserRole::Manager))
    }
}
