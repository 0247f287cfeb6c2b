//! Client entity and input validation.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A persisted client record. Serializes to the plain wire shape used by
/// single-entity responses.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Raw client fields as they arrive from the wire, before validation.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ClientPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub birth_date: String,
}

impl ClientPayload {
    /// Checks the three client invariants and returns one human-readable
    /// message per violated rule, ordered name, email, birth date. Never
    /// fails; callers decide how to react to a non-empty list.
    pub fn violations(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Nome é obrigatório".to_string());
        }

        if !is_valid_email(&self.email) {
            errors.push("Email deve ser válido".to_string());
        }

        if parse_birth_date(&self.birth_date).is_none() {
            errors.push("Data de nascimento deve ser válida".to_string());
        }

        errors
    }
}

/// Fields for a client insert, already validated.
#[derive(Clone, Debug)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
}

/// Fields for a full-record client update, already validated.
#[derive(Clone, Debug)]
pub struct UpdateClient {
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
}

impl TryFrom<&ClientPayload> for NewClient {
    type Error = Vec<String>;

    fn try_from(payload: &ClientPayload) -> Result<Self, Self::Error> {
        let (name, email, birth_date) = validate_payload(payload)?;
        Ok(Self {
            name,
            email,
            birth_date,
        })
    }
}

impl TryFrom<&ClientPayload> for UpdateClient {
    type Error = Vec<String>;

    fn try_from(payload: &ClientPayload) -> Result<Self, Self::Error> {
        let (name, email, birth_date) = validate_payload(payload)?;
        Ok(Self {
            name,
            email,
            birth_date,
        })
    }
}

fn validate_payload(payload: &ClientPayload) -> Result<(String, String, NaiveDate), Vec<String>> {
    let violations = payload.violations();
    match parse_birth_date(&payload.birth_date) {
        Some(birth_date) if violations.is_empty() => {
            Ok((payload.name.clone(), payload.email.clone(), birth_date))
        }
        _ => Err(violations),
    }
}

/// Birth dates are accepted in calendar form only.
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Matches the `^[^\s@]+@[^\s@]+\.[^\s@]+$` email shape: a single `@`, no
/// whitespace anywhere, and a dot inside the domain part.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}
