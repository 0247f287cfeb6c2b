//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::sale::ClientSaleRow;
use crate::domain::stats::{ClientLeaderboard, DailySales, GeneralStats};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClientFilter, ClientListQuery, ClientReader, ClientWriter, StatsReader, UserReader, UserWriter,
};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
        fn list_client_sales(&self, query: &ClientListQuery) -> RepositoryResult<Vec<ClientSaleRow>>;
        fn count_clients(&self, filter: &ClientFilter) -> RepositoryResult<i64>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
        fn update_client(
            &self,
            client_id: i32,
            updates: &UpdateClient,
        ) -> RepositoryResult<Option<Client>>;
        fn delete_client(&self, client_id: i32) -> RepositoryResult<usize>;
    }

    impl UserReader for Repository {
        fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    }

    impl StatsReader for Repository {
        fn sales_by_day(&self) -> RepositoryResult<Vec<DailySales>>;
        fn client_leaderboard(&self) -> RepositoryResult<ClientLeaderboard>;
        fn general_stats(&self) -> RepositoryResult<GeneralStats>;
    }
}
