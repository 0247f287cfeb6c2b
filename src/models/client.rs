use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::client::{
    Client as DomainClient, NewClient as DomainNewClient, UpdateClient as DomainUpdateClient,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`]. Timestamps come from the column defaults.
pub struct NewClient<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub birth_date: NaiveDate,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clients)]
/// Data used when updating a [`Client`] record. All three payload fields are
/// rewritten together and `updated_at` is bumped server-side.
pub struct UpdateClient<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub birth_date: NaiveDate,
    pub updated_at: NaiveDateTime,
}

impl<'a> UpdateClient<'a> {
    pub fn new(updates: &'a DomainUpdateClient, updated_at: NaiveDateTime) -> Self {
        Self {
            name: &updates.name,
            email: &updates.email,
            birth_date: updates.birth_date,
            updated_at,
        }
    }
}

impl From<Client> for DomainClient {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            email: client.email,
            birth_date: client.birth_date,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            name: &client.name,
            email: &client.email,
            birth_date: client.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn from_domain_new_creates_newclient() {
        let domain = DomainNewClient {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1992, 5, 1).unwrap(),
        };
        let new: NewClient = (&domain).into();
        assert_eq!(new.name, domain.name);
        assert_eq!(new.email, domain.email);
        assert_eq!(new.birth_date, domain.birth_date);
    }

    #[test]
    fn client_into_domain() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_client = Client {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1992, 5, 1).unwrap(),
            created_at: now,
            updated_at: now,
        };
        let domain: DomainClient = db_client.into();
        assert_eq!(domain.id, 1);
        assert_eq!(domain.name, "Ana");
        assert_eq!(domain.email, "ana@x.com");
        assert_eq!(domain.created_at, now);
    }
}
