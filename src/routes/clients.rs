use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::client::ClientPayload;
use crate::dto::client::ClientListParams;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::client as client_service;

#[post("/clients")]
pub async fn create_client(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<ClientPayload>,
) -> Result<HttpResponse, ServiceError> {
    let client = client_service::create_client(repo.get_ref(), &payload)?;
    Ok(HttpResponse::Created().json(client))
}

#[get("/clients")]
pub async fn list_clients(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<ClientListParams>,
) -> Result<HttpResponse, ServiceError> {
    let envelope = client_service::list_clients(repo.get_ref(), &params)?;
    Ok(HttpResponse::Ok().json(envelope))
}

#[get("/clients/{id}")]
pub async fn get_client(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let client = client_service::get_client_by_id(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(client))
}

#[put("/clients/{id}")]
pub async fn update_client(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    payload: web::Json<ClientPayload>,
) -> Result<HttpResponse, ServiceError> {
    let client = client_service::update_client(repo.get_ref(), path.into_inner(), &payload)?;
    Ok(HttpResponse::Ok().json(client))
}

#[delete("/clients/{id}")]
pub async fn delete_client(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    client_service::delete_client(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
