use actix_web::{HttpResponse, post, web};

use crate::dto::auth::LoginForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::auth as auth_service;

#[post("/auth/login")]
pub async fn login(
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    form: web::Json<LoginForm>,
) -> Result<HttpResponse, ServiceError> {
    let response = auth_service::login(repo.get_ref(), &config.secret, &form)?;
    Ok(HttpResponse::Ok().json(response))
}
