use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::sale::ClientSaleRow;
use crate::domain::stats::{ClientLeaderboard, DailySales, GeneralStats};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod client;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod stats;
pub mod user;

/// 1-based page selection over the client listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
}

impl Pagination {
    pub const DEFAULT_PAGE: usize = 1;
    pub const DEFAULT_LIMIT: usize = 10;

    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }

    /// Rows skipped before the requested page starts. Page and limit come
    /// straight from the query string, so the arithmetic saturates instead
    /// of trusting them to stay small.
    pub fn offset(&self) -> i64 {
        let skipped = self.page.saturating_sub(1).saturating_mul(self.limit);
        i64::try_from(skipped).unwrap_or(i64::MAX)
    }

    /// Page size clamped into SQL range.
    pub fn limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Optional substring conditions, ANDed together when both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilter {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ClientFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Filter plus pagination for one page of the client/sales join.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientListQuery {
    pub filter: ClientFilter,
    pub pagination: Pagination,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: ClientFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn paginate(mut self, page: usize, limit: usize) -> Self {
        self.pagination = Pagination::new(page, limit);
        self
    }
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
    /// One row per (client, sale) pair; clients without sales yield a single
    /// row with no sale attached. Ordered by client name ascending.
    fn list_client_sales(&self, query: &ClientListQuery) -> RepositoryResult<Vec<ClientSaleRow>>;
    /// Total matching clients, ignoring pagination.
    fn count_clients(&self, filter: &ClientFilter) -> RepositoryResult<i64>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    /// Returns `None` when no row matched the id.
    fn update_client(&self, client_id: i32, updates: &UpdateClient)
    -> RepositoryResult<Option<Client>>;
    /// Returns the number of rows removed (0 or 1). Dependent sales go with
    /// the client through the foreign-key cascade.
    fn delete_client(&self, client_id: i32) -> RepositoryResult<usize>;
}

pub trait UserReader {
    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}

pub trait StatsReader {
    fn sales_by_day(&self) -> RepositoryResult<Vec<DailySales>>;
    fn client_leaderboard(&self) -> RepositoryResult<ClientLeaderboard>;
    fn general_stats(&self) -> RepositoryResult<GeneralStats>;
}

/// Diesel-backed implementation of the repository traits, holding the
/// injected connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> Result<DbConnection, RepositoryError> {
        Ok(get_connection(&self.pool)?)
    }
}
