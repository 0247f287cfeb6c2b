//! Users able to authenticate against the API.

use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Bcrypt hash, never the plaintext password.
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    /// Bcrypt hash produced by the caller.
    pub password: String,
}
