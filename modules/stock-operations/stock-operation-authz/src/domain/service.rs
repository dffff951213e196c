//! Domain service for the stock operation `AuthZ` module.

use std::sync::{Arc, OnceLock};

use stock_operation_authz_sdk::{
    OperationPermissionRequest, OperationPermissions, OperationSide, OperationType,
    OperationTypeAuthorization, Party, PrivilegeGrant, StockCatalogPluginClient,
};
use tracing::{debug, warn};
use uuid::Uuid;

use super::error::DomainError;
use super::resolver::{self, CreationPolicy, PermissionPrivileges};
use crate::config::StockOperationAuthzConfig;

/// Late-bound catalog source shared between the module and the service.
pub type CatalogSourceSlot = Arc<OnceLock<Arc<dyn StockCatalogPluginClient>>>;

/// Stock operation `AuthZ` service.
///
/// Loads fresh snapshots from the catalog source on every call and hands them
/// to the pure rules in [`resolver`].
pub struct Service {
    source: CatalogSourceSlot,
    policy: CreationPolicy,
    privileges: PermissionPrivileges,
}

impl Service {
    #[must_use]
    pub fn new(source: CatalogSourceSlot, cfg: &StockOperationAuthzConfig) -> Self {
        Self {
            source,
            policy: cfg.creation_policy(),
            privileges: cfg.permission_privileges(),
        }
    }

    /// Build a service bound to an already available catalog source.
    #[must_use]
    pub fn with_source(
        source: Arc<dyn StockCatalogPluginClient>,
        cfg: &StockOperationAuthzConfig,
    ) -> Self {
        Self::new(Arc::new(OnceLock::from(source)), cfg)
    }

    fn source(&self) -> Result<&Arc<dyn StockCatalogPluginClient>, DomainError> {
        self.source.get().ok_or_else(|| {
            warn!("Catalog source not registered yet");
            DomainError::CatalogSourceMissing
        })
    }

    /// Resolve the viewable and creatable operation types for `user_id`.
    ///
    /// # Errors
    ///
    /// - `CatalogSourceMissing` if no catalog source is registered
    /// - Catalog source errors
    #[tracing::instrument(skip_all, fields(%user_id))]
    pub async fn resolve_operation_types(
        &self,
        user_id: Uuid,
    ) -> Result<OperationTypeAuthorization, DomainError> {
        let source = self.source()?;
        let (grants, operation_types, parties) = tokio::try_join!(
            source.list_user_grants(user_id),
            source.list_operation_types(),
            source.list_parties(),
        )?;
        debug!(
            grants = grants.len(),
            operation_types = operation_types.len(),
            parties = parties.len(),
            "Loaded catalog snapshots"
        );

        let viewable = resolver::resolve_viewable_operation_types(&grants, &operation_types);
        let creatable = resolver::resolve_creatable_operation_types(
            &grants,
            &operation_types,
            &parties,
            &self.policy,
        );
        debug!(
            viewable = viewable.len(),
            creatable = creatable.len(),
            "Resolved operation types"
        );

        Ok(OperationTypeAuthorization {
            viewable,
            creatable,
        })
    }

    /// Parties `user_id` may pick for `side` of an operation type.
    ///
    /// # Errors
    ///
    /// - `OperationTypeNotFound` if the operation type is not in the catalog
    /// - `CatalogSourceMissing` if no catalog source is registered
    /// - Catalog source errors
    #[tracing::instrument(skip_all, fields(%user_id, %operation_type_uuid, ?side))]
    pub async fn eligible_parties(
        &self,
        user_id: Uuid,
        operation_type_uuid: Uuid,
        side: OperationSide,
    ) -> Result<Vec<Party>, DomainError> {
        let source = self.source()?;
        let (grants, operation_types, parties) = tokio::try_join!(
            source.list_user_grants(user_id),
            source.list_operation_types(),
            source.list_parties(),
        )?;
        let operation_type = find_operation_type(&operation_types, operation_type_uuid)?;

        Ok(resolver::eligible_parties_for_user(
            operation_type,
            side,
            &parties,
            &grants,
            &self.policy.mutate_privilege,
        ))
    }

    /// What `user_id` may do with a single stock operation.
    ///
    /// # Errors
    ///
    /// - `OperationTypeNotFound` if the operation type is not in the catalog
    /// - `CatalogSourceMissing` if no catalog source is registered
    /// - Catalog source errors
    #[tracing::instrument(skip_all, fields(%user_id, operation_type_uuid = %request.operation_type_uuid))]
    pub async fn operation_permissions(
        &self,
        user_id: Uuid,
        request: &OperationPermissionRequest,
    ) -> Result<OperationPermissions, DomainError> {
        let source = self.source()?;
        let (grants, operation_types): (Vec<PrivilegeGrant>, Vec<OperationType>) = tokio::try_join!(
            source.list_user_grants(user_id),
            source.list_operation_types(),
        )?;
        let operation_type = find_operation_type(&operation_types, request.operation_type_uuid)?;

        Ok(resolver::operation_permissions(
            &grants,
            operation_type,
            request,
            &self.privileges,
        ))
    }
}

fn find_operation_type(
    operation_types: &[OperationType],
    uuid: Uuid,
) -> Result<&OperationType, DomainError> {
    operation_types
        .iter()
        .find(|op| op.uuid == uuid)
        .ok_or_else(|| {
            warn!(operation_type = %uuid, "Operation type not in catalog");
            DomainError::OperationTypeNotFound { uuid }
        })
}
