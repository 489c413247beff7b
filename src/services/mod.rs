//! Services turning request parameters and backend responses into page
//! data. Routes stay thin; every decision that can be tested without a
//! running server lives here.

use thiserror::Error;

use crate::api::ApiError;

pub mod dashboard;
pub mod delete;
pub mod employee;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Form validation error: {0}")]
    Form(String),

    #[error("Delete confirmation rejected: {0}")]
    Confirmation(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
