//! Domain errors for the stock operation `AuthZ` module.

use stock_operation_authz_sdk::StockOperationAuthzError;
use uuid::Uuid;

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("no catalog source registered")]
    CatalogSourceMissing,

    #[error("catalog source unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("operation type not found: {uuid}")]
    OperationTypeNotFound { uuid: Uuid },

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StockOperationAuthzError> for DomainError {
    fn from(e: StockOperationAuthzError) -> Self {
        match e {
            StockOperationAuthzError::NoCatalogSource => Self::CatalogSourceMissing,
            StockOperationAuthzError::ServiceUnavailable(msg) => Self::CatalogUnavailable(msg),
            StockOperationAuthzError::OperationTypeNotFound { uuid } => {
                Self::OperationTypeNotFound { uuid }
            }
            StockOperationAuthzError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<DomainError> for StockOperationAuthzError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::CatalogSourceMissing => Self::NoCatalogSource,
            DomainError::CatalogUnavailable(msg) => Self::ServiceUnavailable(msg),
            DomainError::OperationTypeNotFound { uuid } => Self::OperationTypeNotFound { uuid },
            DomainError::Internal(msg) => Self::Internal(msg),
        }
    }
}
