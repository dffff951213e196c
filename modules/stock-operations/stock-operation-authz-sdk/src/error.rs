//! Error types for the stock operation `AuthZ` module.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when using the stock operation `AuthZ` API.
///
/// These represent infrastructure failures and unknown references only.
/// A user without privileges gets an empty resolution, not an error.
#[derive(Debug, Error)]
pub enum StockOperationAuthzError {
    /// No catalog source is configured.
    #[error("no catalog source available")]
    NoCatalogSource,

    /// The catalog source failed or is not ready.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The referenced operation type is not in the catalog.
    #[error("operation type not found: {uuid}")]
    OperationTypeNotFound { uuid: Uuid },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
