//! HTTP boundary: handlers and the service-error to response mapping.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, get};
use chrono::Utc;
use log::error;
use serde_json::json;

use crate::services::ServiceError;

pub mod auth;
pub mod clients;
pub mod stats;

// One lossless mapping for the whole taxonomy; handlers just use `?`.
impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::Repository(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Validation(errors) => {
                HttpResponse::BadRequest().json(json!({ "errors": errors }))
            }
            ServiceError::NotFound(message) => {
                HttpResponse::NotFound().json(json!({ "error": message }))
            }
            ServiceError::Conflict(message) => {
                HttpResponse::Conflict().json(json!({ "error": message }))
            }
            ServiceError::Unauthorized => {
                HttpResponse::Unauthorized().json(json!({ "error": "Credenciais inválidas" }))
            }
            ServiceError::Repository(err) => {
                error!("Repository failure: {err}");
                HttpResponse::InternalServerError()
                    .json(json!({ "error": "Erro interno do servidor" }))
            }
            ServiceError::Internal(err) => {
                error!("Internal failure: {err}");
                HttpResponse::InternalServerError()
                    .json(json!({ "error": "Erro interno do servidor" }))
            }
        }
    }
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
