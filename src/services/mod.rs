//! Business services orchestrating repository calls.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod client;
pub mod stats;

/// Domain failure taxonomy surfaced to the boundary layer. Only these kinds
/// are raised deliberately; any other repository failure passes through via
/// `Repository` and is treated as fatal.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input failed entity invariants; carries every violated rule in order.
    #[error("Dados inválidos")]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Credenciais inválidas")]
    Unauthorized,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Erro interno do servidor")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
