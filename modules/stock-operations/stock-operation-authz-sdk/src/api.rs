//! Public API trait for the stock operation `AuthZ` module.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StockOperationAuthzError;
use crate::models::{
    OperationPermissionRequest, OperationPermissions, OperationSide, OperationTypeAuthorization,
    Party,
};

/// Public API trait for stock operation authorization.
///
/// Consumed by the screens that render the operation-type selector and the
/// source/destination pickers:
///
/// ```ignore
/// let resolved = authz.resolve_operation_types(user_id).await?;
/// let sources = authz
///     .eligible_parties(user_id, op_type_uuid, OperationSide::Source)
///     .await?;
/// ```
#[async_trait]
pub trait StockOperationAuthzClient: Send + Sync {
    /// Resolve the operation types the user may view and create.
    ///
    /// # Errors
    ///
    /// - `NoCatalogSource` if no catalog source is configured
    /// - `ServiceUnavailable` if a catalog snapshot cannot be loaded
    /// - `Internal` for unexpected errors
    async fn resolve_operation_types(
        &self,
        user_id: Uuid,
    ) -> Result<OperationTypeAuthorization, StockOperationAuthzError>;

    /// List the parties the user may pick for one side of an operation type.
    ///
    /// # Errors
    ///
    /// - `OperationTypeNotFound` if the operation type is not in the catalog
    /// - `ServiceUnavailable` if a catalog snapshot cannot be loaded
    /// - `Internal` for unexpected errors
    async fn eligible_parties(
        &self,
        user_id: Uuid,
        operation_type_uuid: Uuid,
        side: OperationSide,
    ) -> Result<Vec<Party>, StockOperationAuthzError>;

    /// Compute what the user may do with a single stock operation.
    ///
    /// # Errors
    ///
    /// - `OperationTypeNotFound` if the operation type is not in the catalog
    /// - `ServiceUnavailable` if a catalog snapshot cannot be loaded
    /// - `Internal` for unexpected errors
    async fn operation_permissions(
        &self,
        user_id: Uuid,
        request: OperationPermissionRequest,
    ) -> Result<OperationPermissions, StockOperationAuthzError>;
}
