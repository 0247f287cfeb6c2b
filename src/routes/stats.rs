use actix_web::{HttpResponse, get, web};

use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::stats as stats_service;

#[get("/stats/sales-by-day")]
pub async fn sales_by_day(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let stats = stats_service::sales_by_day(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(stats))
}

#[get("/stats/client-stats")]
pub async fn client_stats(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let leaderboard = stats_service::client_leaderboard(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(leaderboard))
}

#[get("/stats/general")]
pub async fn general_stats(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let stats = stats_service::general_stats(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(stats))
}
