//! Client query service: validation, CRUD orchestration and the grouped,
//! formatted list envelope.

use std::collections::HashMap;

use crate::domain::client::{Client, ClientPayload, NewClient, UpdateClient};
use crate::domain::sale::{ClientSaleRow, SaleRecord};
use crate::dto::client::{ClientListEnvelope, ClientListParams, FormattedClient};
use crate::repository::errors::RepositoryError;
use crate::repository::{ClientFilter, ClientListQuery, ClientReader, ClientWriter, Pagination};
use crate::services::{ServiceError, ServiceResult};

const CLIENT_NOT_FOUND: &str = "Cliente não encontrado";
const EMAIL_IN_USE: &str = "Email já está em uso";

/// Validates the payload and persists a new client, returning the freshly
/// read record. A unique-email collision maps to `Conflict`.
pub fn create_client<R>(repo: &R, payload: &ClientPayload) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    let new_client = NewClient::try_from(payload).map_err(ServiceError::Validation)?;

    match repo.create_client(&new_client) {
        Ok(client) => Ok(client),
        Err(RepositoryError::UniqueViolation(_)) => {
            Err(ServiceError::Conflict(EMAIL_IN_USE.to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Returns one page of clients in the formatted envelope: join rows are
/// grouped by client id (first occurrence wins the position), each group is
/// formatted with its sales, and the total ignores pagination.
pub fn list_clients<R>(repo: &R, params: &ClientListParams) -> ServiceResult<ClientListEnvelope>
where
    R: ClientReader + ?Sized,
{
    let pagination = Pagination::new(
        parse_positive(params.page.as_deref(), Pagination::DEFAULT_PAGE),
        parse_positive(params.limit.as_deref(), Pagination::DEFAULT_LIMIT),
    );
    let filter = ClientFilter {
        name: clean_filter(params.name.as_deref()),
        email: clean_filter(params.email.as_deref()),
    };

    let query = ClientListQuery {
        filter: filter.clone(),
        pagination,
    };
    // Independent reads; no ordering dependency between them.
    let rows = repo.list_client_sales(&query)?;
    let total = repo.count_clients(&filter)?;

    let clientes = group_rows(rows)
        .into_iter()
        .map(|(client, sales)| FormattedClient::new(&client, sales))
        .collect();

    Ok(ClientListEnvelope::new(clientes, total, pagination.page))
}

/// Fetches a client by id, serialized in the plain shape.
pub fn get_client_by_id<R>(repo: &R, client_id: i32) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    repo.get_client_by_id(client_id)?
        .ok_or_else(|| ServiceError::NotFound(CLIENT_NOT_FOUND.to_string()))
}

/// Validates the payload and rewrites the full record. Missing id reports
/// `NotFound`; an email collision reports `Conflict`.
pub fn update_client<R>(repo: &R, client_id: i32, payload: &ClientPayload) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    let updates = UpdateClient::try_from(payload).map_err(ServiceError::Validation)?;

    match repo.update_client(client_id, &updates) {
        Ok(Some(client)) => Ok(client),
        Ok(None) => Err(ServiceError::NotFound(CLIENT_NOT_FOUND.to_string())),
        Err(RepositoryError::UniqueViolation(_)) => {
            Err(ServiceError::Conflict(EMAIL_IN_USE.to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Deletes a client; success is signalled by the absence of failure.
pub fn delete_client<R>(repo: &R, client_id: i32) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    match repo.delete_client(client_id)? {
        0 => Err(ServiceError::NotFound(CLIENT_NOT_FOUND.to_string())),
        _ => Ok(()),
    }
}

/// Folds join rows back into one entry per client, preserving the order in
/// which client ids first appear. Rows without a sale contribute an empty
/// group, never an absent one.
fn group_rows(rows: Vec<ClientSaleRow>) -> Vec<(Client, Vec<SaleRecord>)> {
    let mut slots: HashMap<i32, usize> = HashMap::new();
    let mut grouped: Vec<(Client, Vec<SaleRecord>)> = Vec::new();

    for row in rows {
        let slot = match slots.get(&row.client.id) {
            Some(slot) => *slot,
            None => {
                slots.insert(row.client.id, grouped.len());
                grouped.push((row.client, Vec::new()));
                grouped.len() - 1
            }
        };
        if let Some(sale) = row.sale {
            grouped[slot].1.push(sale);
        }
    }

    grouped
}

fn parse_positive(value: Option<&str>, default: usize) -> usize {
    value
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn clean_filter(value: Option<&str>) -> Option<String> {
    value
        .map(str::to_string)
        .filter(|value| !value.is_empty())
}
