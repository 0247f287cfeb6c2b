//! Credential checks and access-token issuance.

use jsonwebtoken::{EncodingKey, Header, encode};

use crate::domain::user::{NewUser, User};
use crate::dto::auth::{AuthUserInfo, LoginForm, LoginResponse};
use crate::models::auth::Claims;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

const TOKEN_TTL_HOURS: i64 = 24;

/// Verifies the credentials and returns a signed 24h token. Unknown username
/// and wrong password are indistinguishable to the caller.
pub fn login<R>(repo: &R, secret: &str, form: &LoginForm) -> ServiceResult<LoginResponse>
where
    R: UserReader + ?Sized,
{
    let mut errors = Vec::new();
    if form.username.trim().is_empty() {
        errors.push("Username é obrigatório".to_string());
    }
    if form.password.is_empty() {
        errors.push("Password é obrigatório".to_string());
    }
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let user = repo
        .get_user_by_username(&form.username)?
        .ok_or(ServiceError::Unauthorized)?;

    let matches = bcrypt::verify(&form.password, &user.password)
        .map_err(|err| ServiceError::Internal(format!("bcrypt verify failed: {err}")))?;
    if !matches {
        return Err(ServiceError::Unauthorized);
    }

    let claims = Claims::new(user.id, user.username.clone(), TOKEN_TTL_HOURS);
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| ServiceError::Internal(format!("token signing failed: {err}")))?;

    Ok(LoginResponse {
        token,
        user: AuthUserInfo {
            id: user.id,
            username: user.username,
        },
    })
}

/// Hashes the password and stores a new user. Used by startup seeding and
/// test fixtures.
pub fn register_user<R>(repo: &R, username: &str, password: &str) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|err| ServiceError::Internal(format!("bcrypt hash failed: {err}")))?;

    repo.create_user(&NewUser {
        username: username.to_string(),
        password: hash,
    })
    .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{DecodingKey, Validation, decode};

    use crate::repository::mock::MockRepository;

    const SECRET: &str = "test-secret";

    fn stored_user(password: &str) -> User {
        User {
            id: 1,
            username: "admin".to_string(),
            // Cost 4 keeps the tests fast.
            password: bcrypt::hash(password, 4).unwrap(),
            created_at: Utc::now().naive_utc(),
        }
    }

    fn form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn login_issues_decodable_token() {
        let mut repo = MockRepository::new();
        let user = stored_user("admin123");
        repo.expect_get_user_by_username()
            .returning(move |_| Ok(Some(user.clone())));

        let response = login(&repo, SECRET, &form("admin", "admin123")).unwrap();
        assert_eq!(response.user.username, "admin");

        let data = decode::<Claims>(
            &response.token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(data.claims.sub, 1);
        assert_eq!(data.claims.username, "admin");
    }

    #[test]
    fn wrong_password_is_unauthorized() {
        let mut repo = MockRepository::new();
        let user = stored_user("admin123");
        repo.expect_get_user_by_username()
            .returning(move |_| Ok(Some(user.clone())));

        let err = login(&repo, SECRET, &form("admin", "nope")).unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized));
    }

    #[test]
    fn unknown_username_is_unauthorized_not_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_username().returning(|_| Ok(None));

        let err = login(&repo, SECRET, &form("ghost", "whatever")).unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized));
    }

    #[test]
    fn empty_fields_fail_validation_before_lookup() {
        let repo = MockRepository::new();
        let err = login(&repo, SECRET, &form("", "")).unwrap_err();
        match err {
            ServiceError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
