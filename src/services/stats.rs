//! Read-only sales statistics.

use crate::domain::stats::{ClientLeaderboard, DailySales, GeneralStats};
use crate::repository::StatsReader;
use crate::services::{ServiceError, ServiceResult};

/// Per-day sales totals, ordered by date.
pub fn sales_by_day<R>(repo: &R) -> ServiceResult<Vec<DailySales>>
where
    R: StatsReader + ?Sized,
{
    repo.sales_by_day().map_err(ServiceError::from)
}

/// Top clients by volume, average sale value and purchase frequency.
pub fn client_leaderboard<R>(repo: &R) -> ServiceResult<ClientLeaderboard>
where
    R: StatsReader + ?Sized,
{
    repo.client_leaderboard().map_err(ServiceError::from)
}

/// Store-wide totals.
pub fn general_stats<R>(repo: &R) -> ServiceResult<GeneralStats>
where
    R: StatsReader + ?Sized,
{
    repo.general_stats().map_err(ServiceError::from)
}
