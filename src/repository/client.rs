use chrono::{NaiveDate, Utc};
use diesel::prelude::*;

use crate::{
    domain::client::{Client, NewClient, UpdateClient},
    domain::sale::{ClientSaleRow, SaleRecord},
    repository::{
        ClientFilter, ClientListQuery, ClientReader, ClientWriter, DieselRepository,
        errors::RepositoryResult,
    },
};

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let client = clients::table
            .find(id)
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Into::into))
    }

    fn list_client_sales(&self, query: &ClientListQuery) -> RepositoryResult<Vec<ClientSaleRow>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::{clients, sales};

        let mut conn = self.conn()?;

        let mut rows = clients::table
            .left_join(sales::table)
            .select((
                DbClient::as_select(),
                sales::sale_date.nullable(),
                sales::value.nullable(),
            ))
            .into_boxed();

        // SQLite LIKE is ASCII case-insensitive, matching the contract.
        if let Some(name) = &query.filter.name {
            rows = rows.filter(clients::name.like(format!("%{name}%")));
        }
        if let Some(email) = &query.filter.email {
            rows = rows.filter(clients::email.like(format!("%{email}%")));
        }

        // LIMIT/OFFSET deliberately page over join rows, not clients.
        let rows = rows
            .order(clients::name.asc())
            .limit(query.pagination.limit())
            .offset(query.pagination.offset())
            .load::<(DbClient, Option<NaiveDate>, Option<f64>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(client, sale_date, value)| ClientSaleRow {
                client: client.into(),
                sale: match (sale_date, value) {
                    (Some(sale_date), Some(value)) => Some(SaleRecord { sale_date, value }),
                    _ => None,
                },
            })
            .collect())
    }

    fn count_clients(&self, filter: &ClientFilter) -> RepositoryResult<i64> {
        use crate::schema::clients;

        let mut conn = self.conn()?;

        let mut query = clients::table.count().into_boxed();
        if let Some(name) = &filter.name {
            query = query.filter(clients::name.like(format!("%{name}%")));
        }
        if let Some(email) = &filter.email {
            query = query.filter(clients::email.like(format!("%{email}%")));
        }

        Ok(query.get_result(&mut conn)?)
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        use crate::models::client::{Client as DbClient, NewClient as DbNewClient};
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let insertable: DbNewClient = new_client.into();
        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Ok(created.into())
    }

    fn update_client(
        &self,
        client_id: i32,
        updates: &UpdateClient,
    ) -> RepositoryResult<Option<Client>> {
        use crate::models::client::{Client as DbClient, UpdateClient as DbUpdateClient};
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let changes = DbUpdateClient::new(updates, Utc::now().naive_utc());

        let updated = diesel::update(clients::table.find(client_id))
            .set(&changes)
            .get_result::<DbClient>(&mut conn)
            .optional()?;

        Ok(updated.map(Into::into))
    }

    fn delete_client(&self, client_id: i32) -> RepositoryResult<usize> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let removed = diesel::delete(clients::table.find(client_id)).execute(&mut conn)?;

        Ok(removed)
    }
}
