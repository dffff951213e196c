//! Local (in-process) client for the stock operation `AuthZ` module.

use std::sync::Arc;

use async_trait::async_trait;
use stock_operation_authz_sdk::{
    OperationPermissionRequest, OperationPermissions, OperationSide, OperationTypeAuthorization,
    Party, StockOperationAuthzClient, StockOperationAuthzError,
};
use uuid::Uuid;

use super::{DomainError, Service};

/// Local client wrapping the service.
pub struct StockOperationAuthzLocalClient {
    svc: Arc<Service>,
}

impl StockOperationAuthzLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> StockOperationAuthzError {
    tracing::error!(operation = op, error = ?e, "stock_operation_authz call failed");
    e.into()
}

#[async_trait]
impl StockOperationAuthzClient for StockOperationAuthzLocalClient {
    async fn resolve_operation_types(
        &self,
        user_id: Uuid,
    ) -> Result<OperationTypeAuthorization, StockOperationAuthzError> {
        self.svc
            .resolve_operation_types(user_id)
            .await
            .map_err(|e| log_and_convert("resolve_operation_types", e))
    }

    async fn eligible_parties(
        &self,
        user_id: Uuid,
        operation_type_uuid: Uuid,
        side: OperationSide,
    ) -> Result<Vec<Party>, StockOperationAuthzError> {
        self.svc
            .eligible_parties(user_id, operation_type_uuid, side)
            .await
            .map_err(|e| log_and_convert("eligible_parties", e))
    }

    async fn operation_permissions(
        &self,
        user_id: Uuid,
        request: OperationPermissionRequest,
    ) -> Result<OperationPermissions, StockOperationAuthzError> {
        self.svc
            .operation_permissions(user_id, &request)
            .await
            .map_err(|e| log_and_convert("operation_permissions", e))
    }
}
