//! Plugin API trait for catalog sources.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StockOperationAuthzError;
use crate::models::{OperationType, Party, PrivilegeGrant};

/// Supplies the snapshots the resolver works on.
///
/// Implementations return empty lists for absent data; errors are reserved
/// for a source that cannot answer at all.
#[async_trait]
pub trait StockCatalogPluginClient: Send + Sync {
    /// Privilege grants held by `user_id`.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` if the source is not ready
    async fn list_user_grants(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PrivilegeGrant>, StockOperationAuthzError>;

    /// The operation type catalog, including nested location scopes.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` if the source is not ready
    async fn list_operation_types(&self) -> Result<Vec<OperationType>, StockOperationAuthzError>;

    /// The party catalog.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` if the source is not ready
    async fn list_parties(&self) -> Result<Vec<Party>, StockOperationAuthzError>;
}
