//! User accounts

use std::sync::OnceLock;

use regex::Regex;

use super::crypto::{hash_password, validate_password, PasswordPolicy};
use super::errors::{ServiceError, ServiceResult};
use super::{allocate_id, log_created, remove_by_id, require_text};
use crate::model::{User, UserRole};
use crate::storage::RecordStore;

const EMAIL_PATTERN: &str = r"^.+@.+\..+$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Basic structural email check: something@something.something
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
        .is_match(email)
}

/// User management over the user store
pub struct UserService {
    users: RecordStore<User>,
    policy: PasswordPolicy,
}

impl UserService {
    pub fn new(users: RecordStore<User>) -> Self {
        Self::with_policy(users, PasswordPolicy::default())
    }

    pub fn with_policy(users: RecordStore<User>, policy: PasswordPolicy) -> Self {
        Self { users, policy }
    }

    /// Creates a user with the next available id.
    ///
    /// Emails are unique, compared case-insensitively. The password is
    /// stored as an Argon2id hash.
    pub fn add_user(
        &self,
        role: UserRole,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> ServiceResult<User> {
        let first_name = require_text("First name", first_name)?;
        let last_name = require_text("Last name", last_name)?;
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(ServiceError::InvalidInput(format!(
                "'{}' is not a valid email address",
                email
            )));
        }
        validate_password(password, &self.policy)?;

        let users = self.users.load_all()?;
        if users.iter().any(|u| same_email(u, email)) {
            return Err(ServiceError::DuplicateEntry(format!(
                "A user with {} as their email already exists",
                email
            )));
        }

        let (password_hash, salt) = hash_password(password)?;
        let id = allocate_id(&users, |u| u.id);
        let user = User {
            id: Some(id),
            role: Some(role),
            first_name: Some(first_name),
            last_name: Some(last_name),
            email: Some(email.to_string()),
            password_hash: Some(password_hash),
            salt: Some(salt),
        };
        self.users.append(user.clone())?;

        log_created::<User>(id);
        Ok(user)
    }

    /// Finds a user by email, case-insensitively.
    pub fn find_user(&self, email: &str) -> ServiceResult<User> {
        let email = email.trim();
        self.users
            .load_all()?
            .into_iter()
            .find(|u| same_email(u, email))
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "A user with {} as their email cannot be found.",
                    email
                ))
            })
    }

    /// Removes a user by id and returns their full name.
    pub fn remove_user(&self, id: i64) -> ServiceResult<String> {
        let removed = remove_by_id(&self.users, id, |u| u.id)?;
        Ok(removed.full_name())
    }

    /// All users in file order.
    pub fn all_users(&self) -> ServiceResult<Vec<User>> {
        Ok(self.users.load_all()?)
    }
}

fn same_email(user: &User, email: &str) -> bool {
    user.email
        .as_deref()
        .is_some_and(|e| e.to_lowercase() == email.to_lowercase())
}
