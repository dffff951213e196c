//! Client implementation for the static stock catalog plugin.
//!
//! Implements `StockCatalogPluginClient` using the domain service.

use async_trait::async_trait;
use stock_operation_authz_sdk::{
    OperationType, Party, PrivilegeGrant, StockCatalogPluginClient, StockOperationAuthzError,
};
use uuid::Uuid;

use super::service::Service;

#[async_trait]
impl StockCatalogPluginClient for Service {
    async fn list_user_grants(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PrivilegeGrant>, StockOperationAuthzError> {
        Ok(self.user_grants(user_id))
    }

    async fn list_operation_types(&self) -> Result<Vec<OperationType>, StockOperationAuthzError> {
        Ok(self.operation_types.clone())
    }

    async fn list_parties(&self) -> Result<Vec<Party>, StockOperationAuthzError> {
        Ok(self.parties.clone())
    }
}
