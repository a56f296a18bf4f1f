use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod branches;
pub mod categories;
pub mod dashboard;
pub mod menu;
pub mod offers;
pub mod orders;
pub mod services;
pub mod settings;
pub mod users;

/// Result type returned by every service function.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced to route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The operator lacks the required role.
    #[error("unauthorized")]
    Unauthorized,
    /// The targeted record does not exist.
    #[error("not found")]
    NotFound,
    /// A uniqueness constraint rejected the write.
    #[error("already exists")]
    Conflict,
    /// The submitted form was rejected; the message is operator-facing.
    #[error("{0}")]
    Form(String),
    /// Any other repository failure.
    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict => ServiceError::Conflict,
            other => ServiceError::Repository(other),
        }
    }
}
