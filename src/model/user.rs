//! Users and their roles

use serde::Serialize;

use crate::schema::{FieldSpec, Record, Symbol};

/// Access level of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Cashier,
    Manager,
}

impl Symbol for UserRole {
    const TYPE_NAME: &'static str = "UserRole";
    const VARIANTS: &'static [Self] = &[UserRole::Cashier, UserRole::Manager];

    fn name(self) -> &'static str {
        match self {
            UserRole::Cashier => "CASHIER",
            UserRole::Manager => "MANAGER",
        }
    }
}

/// A user who can log in to the shop
///
/// The password is never stored; `password_hash` holds an Argon2id PHC
/// string and `salt` the salt it was derived with.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<i64>,
    pub role: Option<UserRole>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    #[serde(skip_serializing)]
    pub salt: Option<String>,
}

impl User {
    /// "First Last", skipping absent parts
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Record for User {
    const TYPE_NAME: &'static str = "User";

    fn fields() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::integer("id", |r: &Self| r.id, |r, v| r.id = Some(v)),
            FieldSpec::symbol("role", |r: &Self| r.role, |r, v| r.role = Some(v)),
            FieldSpec::text("firstName", |r: &Self| r.first_name.clone(), |r, v| {
                r.first_name = Some(v)
            }),
            FieldSpec::text("lastName", |r: &Self| r.last_name.clone(), |r, v| {
                r.last_name = Some(v)
            }),
            FieldSpec::text("email", |r: &Self| r.email.clone(), |r, v| r.email = Some(v)),
            FieldSpec::text("passwordHash", |r: &Self| r.password_hash.clone(), |r, v| {
                r.password_hash = Some(v)
            }),
            FieldSpec::text("salt", |r: &Self| r.salt.clone(), |r, v| r.salt = Some(v)),
        ]
    }
}
