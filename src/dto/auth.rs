//! Login request and response shapes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUserInfo,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthUserInfo {
    pub id: i32,
    pub username: String,
}
